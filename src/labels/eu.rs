use super::Labels;

const WEEKDAYS: [&str; 10] = [
    "Legun", "Bigun", "Higun", "Logun", "Bogun", "Segun", "Pegun", "Zogun", "Bedegun", "Margun",
];

const MONTHS: [&str; 13] = [
    "Mahaxte", "Lainote", "Izozte", "Elurkor", "Eurikor", "Haizekor", "Sapadun", "Lilidun",
    "Belardun", "Bihilis", "Berolis", "Frutilis", "Betagailak",
];

const DAYS_OF_YEAR: [&[&str]; 13] = [
    // Vendémiaire
    &[
        "Mahatsa", "Azafraia", "Gaztaina", "Kolkida", "Zaldia", "Baltsamina", "Azenarioa",
        "Amarantoa", "Txiribia", "Treska", "Patata", "Betibizi horia", "Cucurbita maxima",
        "Herezea", "Astoa", "Gau-lorea", "Kuia", "Artobeltza", "Ekilorea", "Dolarea", "Kalamua",
        "Mertxika", "Arbia", "Amaryllis", "Idia", "Alberjinia", "Piperra", "Tomatea", "Garagarra",
        "Upela",
    ],
    // Brumaire
    &[
        "Sagarra", "Apioa", "Madaria", "Beterraba", "Antzara", "Heliotropoa", "Pikua",
        "Sendapokia", "Hostazuria", "Goldea", "Terebuza", "Ur gaztaina", "Topinanbua", "Endibia",
        "Indioiloa", "Sium sisarum", "Berroa", "Plumbago", "Alesagarra", "Area",
        "Baccharis halimifolia", "Mazpil-elorria", "Tindu-otxarra", "Laranja", "Faisaia",
        "Pistatxoa", "Lathyrus tuberosus", "Irasagarra", "Gurbeondoa", "Arrabola",
    ],
    // Frimaire
    &[
        "Ezkila-lorea", "Arbia", "Txikoria", "Mizpira", "Txerria", "Ardi-mihia", "Azalorea",
        "Eztia", "Orrea", "Pikotxa", "Argizaria", "Errefau mina", "Zedroa", "Izeia", "Orkatza",
        "Otea", "Nekosta", "Huntza", "Miterra", "Aitzur luzea", "Iharra", "Txilarra", "Kanabera",
        "Lapaitza", "Kilkerra", "Pinazia", "Tortotxa", "Boilurra", "Oliba", "Pala",
    ],
    // Nivôse
    &[
        "Zohikatza", "Ikatza", "Ziraia", "Sufrea", "Txakurra", "Laba", "Humusa", "Simaurra",
        "Kresala", "Idaurra", "Granitoa", "Buztina", "Arbela", "Hareharria", "Untxia", "Silexa",
        "Marga", "Kareharria", "Marmola", "Bahea", "Igeltsua", "Gatza", "Burdina", "Kobrea",
        "Katua", "Eztainua", "Beruna", "Zinka", "Merkurioa", "Bahea",
    ],
    // Pluviôse
    &[
        "Garatxo-belarra", "Goroldioa", "Erratza", "Galanthus", "Zezena", "Gogortxua", "Ardagaia",
        "Ereinoztxoa", "Makala", "Aizkora", "Otsababa", "Brokolia", "Ereinotza", "Hurritza",
        "Behia", "Ezpela", "Likena", "Hagina", "Biri-belarra", "Inauskaia", "Thlaspli",
        "Torbiskoa", "Askiluzea", "Odolurra", "Erbia", "Urdinbelarra", "Corylusa", "Ziklamena",
        "Zaran-belarra", "Lera",
    ],
    // Ventôse
    &[
        "Eztul-belarra", "Zuhandorra", "Ahuntz-praka", "Binorria", "Akerra", "Jengibrea",
        "Karraskila", "Bioleta", "Ahuntz-sahatsa", "Laia", "Lilipa", "Zumarra", "Negakina",
        "Erysimum", "Ahuntza", "Ziazerba", "Doronicum", "Anagallis", "Perraitza", "Haria",
        "Urriloa", "Perrexila", "Cochlearia", "Bitxilorea", "Atuna", "Txikoria-belarra",
        "Baso-eguerdililia", "Garaizka", "Lizarra", "Landatzailea",
    ],
    // Germinal
    &[
        "Udaberri-lore goiztiarra", "Sikomoroa", "Zainzuria", "Idi-bihotza", "Oiloa", "Zerba",
        "Urkia", "Lilipa", "Haltza", "Inkubagailua", "Inkonte-belar txikia", "Xarma", "Karraspina",
        "Pagoa", "Erlea", "Uraza", "Alertzea", "Astaperrexila", "Errefaua", "Erlauntza",
        "Judasen arbola", "Uraza erromatarra", "Indigaztainondoa", "Eruca sativa", "Usoa", "Lila",
        "Eguerdililia", "Pentsamendua", "Ahabia", "Aiztoa",
    ],
    // Floréal
    &[
        "Arrosa", "Haritza", "Iratzea", "Crataegus", "Urretxindorra", "Kuku-belarra",
        "Convallaria majalis", "Perretxikoa", "Hiazintoa", "Arrastelua", "Rheum", "Astorkia",
        "Urrezko makila", "Palmondo nanoa", "Zeta-harra", "Zolda-belarra", "Gaitun txikia",
        "Urrezko saskia", "Garadaizka", "Galjorraia", "Itsas krabelina", "Fritillaria", "Borraja",
        "Belar bedeinkatua", "Karpa", "Basaerramua", "Tipulina", "Anchusa", "Ziape zuria",
        "Garadaizka",
    ],
    // Prairial
    &[
        "Luzerna", "Hemerocallis", "Hirusta", "Aingeru-belarra", "Ahatea", "Garraiska",
        "Arrhenatherum elatius", "Zitori gorria", "Sarpoila", "Sega", "Marrubia", "Salbia",
        "Ilarra", "Akazia", "Galeperra", "Krabelina", "Intsusa", "Lo-belarra", "Ezkia", "Sardea",
        "Barboa", "Kamamila", "Sasiama", "Ziabelarra", "Tenka", "Jasmina", "Berbena", "Ezkaia",
        "Oinlodia", "Gurdia",
    ],
    // Messidor
    &[
        "Zekalea", "Oloa", "Tipula", "Veronica", "Mandoa", "Erromeroa", "Luzokerra", "Tipulatxa",
        "Absenta", "Igitaia", "Martorria", "Orburua", "Iltzea", "Izpilikua", "Sarrioa", "Tabakoa",
        "Andere-mahatsa", "Lathyrus", "Gerezia", "Eskorta", "Menda", "Kuminoa", "Indaba",
        "Alkanna tinctoria", "Numididae", "Salbia", "Baratxuria", "Zalkea", "Garia", "Chalémie",
    ],
    // Thermidor
    &[
        "Espelta", "Apo-belarra", "Meloia", "Iraka", "Aharia", "Equisetopsida", "Zizare-belarra",
        "Kartamoa", "Masusta", "Ureztagailua", "Panicum", "Salicornia", "Abrikotondoa", "Albaka",
        "Ardia", "Malba zuria", "Lihoa", "Arbendola", "Errosta", "Esklusa", "Eguzki-lorea",
        "Kaparrondoa", "Dilista", "Haltza", "Igaraba", "Mirtoa", "Koltza", "Eskuhoria", "Kotoia",
        "Errota",
    ],
    // Fructidor
    &[
        "Arana", "Artatxikia", "Otsoaren putza", "Garagarra", "Izokina", "Akara", "Garagarra",
        "Asclepias syriaca", "Erregaliza", "Eskala", "Angurria", "Mihilua", "Isuski-garratza",
        "Intxaurra", "Amuarraina", "Limoia", "Astalarra", "Rhamnus", "Tagetes", "-Saskia",
        "Arkakaratsa", "Hurra", "Lupulua", "Basartoa", "Ibai-karramarroa", "Laranja mingotsa",
        "Solidagoa", "Artoa", "Gaztaina", "Otarrea",
    ],
    // Sansculottides
    &[
        "Bertutea", "Aztitasuna", "Lana", "Iritzia", "Ordain-sari", "Iraultza",
    ],
];

const OBJECT_TYPES: [&str; 5] = [
    "Landarea", "Animalia", "Tresna", "Minerala", "Kontzeptua",
];

pub(super) static LABELS: Labels = Labels {
    weekdays: &WEEKDAYS,
    months: &MONTHS,
    days_of_year: &DAYS_OF_YEAR,
    object_types: &OBJECT_TYPES,
};
