use super::Labels;

const WEEKDAYS: [&str; 10] = [
    "Primidì", "Duodì", "Tridì", "Quartidì", "Quintidì", "Sestidì", "Settidì", "Ottidì", "Nonidì",
    "Decadì",
];

const MONTHS: [&str; 13] = [
    "Vendemmiaio", "Brumaio", "Frimaio", "Nevoso", "Piovoso", "Ventoso", "Germinale", "Fiorile",
    "Pratile", "Messidoro", "Termidoro", "Fruttidoro", "Sanculottidi",
];

const DAYS_OF_YEAR: [&[&str]; 13] = [
    // Vendémiaire
    &[
        "Uva", "Zafferano", "Castagna", "Colchico", "Cavallo", "Balsamina", "Carota", "Amaranto",
        "Pastinaca", "Tino", "Patata", "Perpetuino", "Zucca", "Reseda", "Asino", "Bella di notte",
        "Zucca", "Grano saraceno", "Girasole", "Torchio", "Canapa", "Pesca", "Rapa", "Amarillide",
        "Bue", "Melanzana", "Peperoncino", "Pomodoro", "Orzo", "Barile",
    ],
    // Brumaire
    &[
        "Mela", "Sedano", "Pera", "Barbabietola", "Oca", "Eliotropio", "Fico", "Scorzonera",
        "Ciavardello", "Aratro", "Barba di becco", "Castagna d'acqua", "Topinambur", "Indivia",
        "Tacchino", "Sisaro", "Crescione", "Piombaggine", "Melograno", "Erpice", "Baccaro",
        "Azzeruolo", "Robbia", "Arancia", "Fagiano", "Pistacchio", "Cicerchia", "Cotogno", "Sorbo",
        "Rullo",
    ],
    // Frimaire
    &[
        "Raponzolo", "Rapa", "Cicoria", "Nespolo", "Maiale", "Soncino", "Cavolfiore", "Miele",
        "Ginepro", "Zappa", "Cera", "Rafano", "Cedro", "Abete", "Capriolo", "Ginestrone",
        "Cipresso", "Edera", "Sabina", "Ascia", "Acero da zucchero", "Erica", "Canna", "Acetosa",
        "Grillo", "Pino", "Sughero", "Tartufo", "Oliva", "Pala",
    ],
    // Nivôse
    &[
        "Torba", "Carbone bituminoso", "Bitume", "Zolfo", "Cane", "Lava", "Terra vegetale",
        "Letame", "Salnitro", "Correggiato", "Granito", "Argilla", "Ardesia", "Arenaria",
        "Coniglio", "Selce", "Marna", "Calcare", "Marmo", "Setaccio", "Gesso", "Sale", "Ferro",
        "Rame", "Gatto", "Stagno", "Piombo", "Zinco", "Mercurio", "Colino",
    ],
    // Pluviôse
    &[
        "Dafne laurella", "Muschio", "Pungitopo", "Bucaneve", "Toro", "Viburno", "Fungo dell'esca",
        "Camalea", "Pioppo", "Scure", "Elleboro", "Broccolo", "Alloro", "Nocciolo", "Vacca",
        "Bosso", "Lichene", "Tasso", "Polmonaria", "Coltello da potatura", "Thlaspi",
        "Dafne odorosa", "Gramigna", "Centinodio", "Lepre", "Guado", "Nocciolo", "Ciclamino",
        "Celidonia", "Slitta",
    ],
    // Ventôse
    &[
        "Tossillagine", "Corniolo", "Violacciocca", "Ligustro", "Caprone", "Baccaro comune",
        "Alaterno", "Violetta", "Salicone", "Vanga", "Narciso", "Olmo", "Fumaria", "Erisimo",
        "Capra", "Spinacio", "Doronico", "Primula", "Cerfoglio", "Corda", "Mandragola",
        "Prezzemolo", "Coclearia", "Margherita", "Tonno", "Dente di leone", "Anemone",
        "Capelvenere", "Frassino", "Piantatoio",
    ],
    // Germinal
    &[
        "Primula", "Platano", "Asparago", "Tulipano", "Gallina", "Bietola", "Betulla", "Narciso",
        "Ontano", "Covata", "Pervinca", "Carpino", "Spugnola", "Faggio", "Ape", "Lattuga",
        "Larice", "Cicuta", "Ravanello", "Arnia", "Albero di Giuda", "Lattuga", "Ippocastano",
        "Rucola", "Piccione", "Anemone/Lillà", "Lillà/Anemone", "Viola del pensiero", "Mirtillo",
        "Coltello da innesto",
    ],
    // Floréal
    &[
        "Rosa", "Quercia", "Felce", "Biancospino", "Usignolo", "Aquilegia", "Mughetto", "Fungo",
        "Giacinto", "Rastrello", "Rabarbaro", "Lupinella", "Violacciocca gialla", "Lonicera",
        "Baco da seta", "Consolida maggiore", "Pimpinella", "Cesto di oro", "Atriplice",
        "Sarchiello", "Statice", "Fritillaria", "Borragine", "Valeriana", "Carpa", "Fusaggine",
        "Erba cipollina", "Buglossa", "Senape", "Vincastro",
    ],
    // Prairial
    &[
        "Erba medica", "Emerocallide", "Trifoglio", "Angelica", "Anatra", "Melissa",
        "Avena altissima", "Giglio martagone", "Timo serpillo", "Falce", "Fragola", "Betonica",
        "Pisello", "Acacia", "Quaglia", "Garofano", "Sambuco", "Papavero", "Tiglio", "Forcone",
        "Fiordaliso", "Camomilla", "Caprifoglio", "Caglio", "Tinca", "Gelsomino", "Verbena",
        "Timo", "Peonia", "Carro",
    ],
    // Messidor
    &[
        "Segale", "Avena", "Cipolla", "Veronica", "Mulo", "Rosmarino", "Cetriolo", "Scalogno",
        "Assenzio", "Falcetto", "Coriandolo", "Carciofo", "Violacciocca", "Lavanda", "Camoscio",
        "Tabacco", "Ribes", "Cicerchia", "Ciliegia", "Ovile", "Menta", "Cumino", "Fagiolo",
        "Alcanna", "Faraona", "Salvia", "Aglio", "Veccia", "Grano", "Ciaramella",
    ],
    // Thermidor
    &[
        "Spelto", "Tasso barbasso", "Melone", "Loglio", "Ariete", "Equiseto", "Artemisia",
        "Cartamo", "Mora", "Annaffiatoio", "Eringio", "Salicornia", "Albicocca", "Basilico",
        "Pecora", "Altea", "Lino", "Mandorla", "Genziana", "Chiusa", "Carlina bianca", "Cappero",
        "Lenticchia", "Enula", "Lontra", "Mirto", "Colza", "Lupino", "Cotone", "Mulino",
    ],
    // Fructidor
    &[
        "Prugna", "Miglio", "Vescia", "Orzo maschio", "Salmone", "Tuberosa", "Orzo comune",
        "Apocino", "Liquirizia", "Scala", "Anguria", "Finocchio", "Crespino", "Noce", "Trota",
        "Limone", "Cardo", "Alaterno", "Garofano d'India", "Gerla", "Rosa canina", "Nocciola",
        "Luppolo", "Sorgo", "Gambero", "Arancio amaro", "Verga d'oro", "Granoturco", "Castagna",
        "Cesta",
    ],
    // Sansculottides
    &[
        "Virtù", "Genio", "Lavoro", "Opinione", "Ricompense", "Rivoluzione",
    ],
];

const OBJECT_TYPES: [&str; 5] = [
    "La pianta", "L'animale", "L'attrezzo", "Il minerale", "L'idea",
];

pub(super) static LABELS: Labels = Labels {
    weekdays: &WEEKDAYS,
    months: &MONTHS,
    days_of_year: &DAYS_OF_YEAR,
    object_types: &OBJECT_TYPES,
};
