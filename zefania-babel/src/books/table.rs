//! Static data for the 66-book Protestant canon.
//!
//! Variants cover English, Portuguese, Spanish, Russian and Ukrainian spellings
//! plus common abbreviations. No normalized variant may be shared between two books.

use super::CanonicalBook;

pub(super) static BOOKS: [CanonicalBook; 66] = [
    // Old Testament
    CanonicalBook {
        number: 1,
        standard_name: "Genesis",
        short_name: "Gn",
        osis_id: "Gen",
        variants: &["Genesis", "Gênesis", "Gen", "Ge", "Génesis", "Gn", "Бытие", "Буття"],
    },
    CanonicalBook {
        number: 2,
        standard_name: "Exodus",
        short_name: "Ex",
        osis_id: "Exod",
        variants: &["Exodus", "Êxodo", "Exod", "Ex", "Éxodo", "Исход", "Вихід"],
    },
    CanonicalBook {
        number: 3,
        standard_name: "Leviticus",
        short_name: "Lv",
        osis_id: "Lev",
        variants: &["Leviticus", "Levítico", "Lev", "Le", "Lv", "Левит", "Левіт"],
    },
    CanonicalBook {
        number: 4,
        standard_name: "Numbers",
        short_name: "Nm",
        osis_id: "Num",
        variants: &["Numbers", "Números", "Num", "Nu", "Nm", "Числа"],
    },
    CanonicalBook {
        number: 5,
        standard_name: "Deuteronomy",
        short_name: "Dt",
        osis_id: "Deut",
        variants: &[
            "Deuteronomy", "Deuteronômio", "Deut", "De", "Deuteronomio", "Dt", "Второзаконие",
            "Второзаконня", "Повторення Закону",
        ],
    },
    CanonicalBook {
        number: 6,
        standard_name: "Joshua",
        short_name: "Js",
        osis_id: "Josh",
        variants: &["Joshua", "Josué", "Josh", "Jos", "Иисус Навин", "Ісус Навин"],
    },
    CanonicalBook {
        number: 7,
        standard_name: "Judges",
        short_name: "Jz",
        osis_id: "Judg",
        variants: &["Judges", "Juízes", "Judg", "Jdg", "Jueces", "Jue", "Судей", "Суддів"],
    },
    CanonicalBook {
        number: 8,
        standard_name: "Ruth",
        short_name: "Rt",
        osis_id: "Ruth",
        variants: &["Ruth", "Rute", "Ru", "Rut", "Руфь", "Рут"],
    },
    CanonicalBook {
        number: 9,
        standard_name: "1 Samuel",
        short_name: "1Sm",
        osis_id: "1Sam",
        variants: &[
            "1 Samuel", "1Samuel", "1Sm", "1 Sam", "I Samuel", "1 S", "1 Самуила", "Первая Самуила",
            "1 Самуїлова",
        ],
    },
    CanonicalBook {
        number: 10,
        standard_name: "2 Samuel",
        short_name: "2Sm",
        osis_id: "2Sam",
        variants: &[
            "2 Samuel", "2Samuel", "2Sm", "2 Sam", "II Samuel", "2 S", "2 Самуила",
            "Вторая Самуила", "2 Самуїлова",
        ],
    },
    CanonicalBook {
        number: 11,
        standard_name: "1 Kings",
        short_name: "1Rs",
        osis_id: "1Kgs",
        variants: &[
            "1 Kings", "1 Reis", "1Kings", "1Rs", "1 Re", "I Kings", "1 Reyes", "1 Rey", "1 Царств",
            "1 Царей", "3 Царств", "1 Царів",
        ],
    },
    CanonicalBook {
        number: 12,
        standard_name: "2 Kings",
        short_name: "2Rs",
        osis_id: "2Kgs",
        variants: &[
            "2 Kings", "2 Reis", "2Kings", "2Rs", "2 Re", "II Kings", "2 Reyes", "2 Rey",
            "2 Царств", "2 Царей", "4 Царств", "2 Царів",
        ],
    },
    CanonicalBook {
        number: 13,
        standard_name: "1 Chronicles",
        short_name: "1Cr",
        osis_id: "1Chr",
        variants: &[
            "1 Chronicles", "1 Crônicas", "1Chronicles", "1Cr", "1 Chr", "I Chronicles",
            "1 Crónicas", "1 Crón", "1 Cr", "1 Паралипоменон", "1 Хроники", "1 Хроник", "1 Хронік",
        ],
    },
    CanonicalBook {
        number: 14,
        standard_name: "2 Chronicles",
        short_name: "2Cr",
        osis_id: "2Chr",
        variants: &[
            "2 Chronicles", "2 Crônicas", "2Chronicles", "2Cr", "2 Chr", "II Chronicles",
            "2 Crónicas", "2 Crón", "2 Cr", "2 Паралипоменон", "2 Хроники", "2 Хроник", "2 Хронік",
        ],
    },
    CanonicalBook {
        number: 15,
        standard_name: "Ezra",
        short_name: "Ed",
        osis_id: "Ezra",
        variants: &["Ezra", "Esdras", "Esd", "Ездра"],
    },
    CanonicalBook {
        number: 16,
        standard_name: "Nehemiah",
        short_name: "Ne",
        osis_id: "Neh",
        variants: &["Nehemiah", "Neemias", "Neh", "Ne", "Nehemías", "Неемия", "Неемія"],
    },
    CanonicalBook {
        number: 17,
        standard_name: "Esther",
        short_name: "Et",
        osis_id: "Esth",
        variants: &["Esther", "Ester", "Est", "Es", "Есфирь", "Естер"],
    },
    CanonicalBook {
        number: 18,
        standard_name: "Job",
        short_name: "Jó",
        osis_id: "Job",
        variants: &["Job", "Jó", "Иов", "Йов"],
    },
    CanonicalBook {
        number: 19,
        standard_name: "Psalms",
        short_name: "Sl",
        osis_id: "Ps",
        variants: &["Psalms", "Salmos", "Psalm", "Ps", "Sal", "Псалтирь", "Псалмы", "Псалми"],
    },
    CanonicalBook {
        number: 20,
        standard_name: "Proverbs",
        short_name: "Pv",
        osis_id: "Prov",
        variants: &[
            "Proverbs", "Provérbios", "Prov", "Pr", "Proverbios", "Притчи", "Приповісті", "Притчі",
        ],
    },
    CanonicalBook {
        number: 21,
        standard_name: "Ecclesiastes",
        short_name: "Ec",
        osis_id: "Eccl",
        variants: &[
            "Ecclesiastes", "Eclesiastes", "Eccl", "Ec", "Eclesiastés", "Ecl", "Екклесиаст",
            "Екклезіаст",
        ],
    },
    CanonicalBook {
        number: 22,
        standard_name: "Song of Songs",
        short_name: "Ct",
        osis_id: "Song",
        variants: &[
            "Song of Songs", "Cantares", "Song", "Ct", "Cantar dos Cantares",
            "Cantar de los Cantares", "Cnt", "Песнь Песней", "Пісня над піснями",
        ],
    },
    CanonicalBook {
        number: 23,
        standard_name: "Isaiah",
        short_name: "Is",
        osis_id: "Isa",
        variants: &["Isaiah", "Isaías", "Isa", "Is", "Исаия", "Ісая"],
    },
    CanonicalBook {
        number: 24,
        standard_name: "Jeremiah",
        short_name: "Jr",
        osis_id: "Jer",
        variants: &["Jeremiah", "Jeremias", "Jer", "Je", "Jeremías", "Иеремия", "Єремія"],
    },
    CanonicalBook {
        number: 25,
        standard_name: "Lamentations",
        short_name: "Lm",
        osis_id: "Lam",
        variants: &[
            "Lamentations", "Lamentações", "Lam", "La", "Lamentaciones", "Lm", "Плач Иеремии",
            "Плач Єремії",
        ],
    },
    CanonicalBook {
        number: 26,
        standard_name: "Ezekiel",
        short_name: "Ez",
        osis_id: "Ezek",
        variants: &["Ezekiel", "Ezequiel", "Ezek", "Eze", "Ez", "Иезекииль", "Єзекіїль"],
    },
    CanonicalBook {
        number: 27,
        standard_name: "Daniel",
        short_name: "Dn",
        osis_id: "Dan",
        variants: &["Daniel", "Dan", "Da", "Dn", "Даниил", "Даниїл"],
    },
    CanonicalBook {
        number: 28,
        standard_name: "Hosea",
        short_name: "Os",
        osis_id: "Hos",
        variants: &["Hosea", "Oséias", "Hos", "Ho", "Oseas", "Os", "Осия", "Осія"],
    },
    CanonicalBook {
        number: 29,
        standard_name: "Joel",
        short_name: "Jl",
        osis_id: "Joel",
        variants: &["Joel", "Jl", "Иоиль", "Йоіл", "Йоїл"],
    },
    CanonicalBook {
        number: 30,
        standard_name: "Amos",
        short_name: "Am",
        osis_id: "Amos",
        variants: &["Amos", "Am", "Amós", "Амос"],
    },
    CanonicalBook {
        number: 31,
        standard_name: "Obadiah",
        short_name: "Ob",
        osis_id: "Obad",
        variants: &["Obadiah", "Obadias", "Obad", "Ob", "Abdías", "Abd", "Авдий", "Овдій"],
    },
    CanonicalBook {
        number: 32,
        standard_name: "Jonah",
        short_name: "Jn",
        osis_id: "Jonah",
        variants: &["Jonah", "Jonas", "Jon", "Jonás", "Иона", "Йона"],
    },
    CanonicalBook {
        number: 33,
        standard_name: "Micah",
        short_name: "Mq",
        osis_id: "Mic",
        variants: &["Micah", "Miquéias", "Mic", "Mi", "Miqueas", "Miq", "Михей"],
    },
    CanonicalBook {
        number: 34,
        standard_name: "Nahum",
        short_name: "Na",
        osis_id: "Nah",
        variants: &["Nahum", "Naum", "Nah", "Na", "Nahúm", "Наум"],
    },
    CanonicalBook {
        number: 35,
        standard_name: "Habakkuk",
        short_name: "Hc",
        osis_id: "Hab",
        variants: &["Habakkuk", "Habacuque", "Hab", "Ha", "Habacuc", "Аввакум", "Авакум"],
    },
    CanonicalBook {
        number: 36,
        standard_name: "Zephaniah",
        short_name: "Sf",
        osis_id: "Zeph",
        variants: &[
            "Zephaniah", "Sofonias", "Zeph", "Zep", "Sofonías", "Sof", "Софония", "Софонія",
        ],
    },
    CanonicalBook {
        number: 37,
        standard_name: "Haggai",
        short_name: "Ag",
        osis_id: "Hag",
        variants: &["Haggai", "Ageu", "Hag", "Hageo", "Аггей", "Агей"],
    },
    CanonicalBook {
        number: 38,
        standard_name: "Zechariah",
        short_name: "Zc",
        osis_id: "Zech",
        variants: &[
            "Zechariah", "Zacarias", "Zech", "Zec", "Zacarías", "Zac", "Захария", "Захарія",
        ],
    },
    CanonicalBook {
        number: 39,
        standard_name: "Malachi",
        short_name: "Ml",
        osis_id: "Mal",
        variants: &["Malachi", "Malaquias", "Mal", "Malaquías", "Малахия", "Малахія"],
    },
    // New Testament
    CanonicalBook {
        number: 40,
        standard_name: "Matthew",
        short_name: "Mt",
        osis_id: "Matt",
        variants: &["Matthew", "Mateus", "Matt", "Mt", "Mateo", "Матфей", "Матвій"],
    },
    CanonicalBook {
        number: 41,
        standard_name: "Mark",
        short_name: "Mc",
        osis_id: "Mark",
        variants: &["Mark", "Marcos", "Mc", "Mr", "Марк", "Марко"],
    },
    CanonicalBook {
        number: 42,
        standard_name: "Luke",
        short_name: "Lc",
        osis_id: "Luke",
        variants: &["Luke", "Lucas", "Lc", "Lu", "Лука"],
    },
    CanonicalBook {
        number: 43,
        standard_name: "John",
        short_name: "Jo",
        osis_id: "John",
        variants: &["John", "João", "Jo", "Jn", "Juan", "Иоанн", "Іван", "Йоан"],
    },
    CanonicalBook {
        number: 44,
        standard_name: "Acts",
        short_name: "At",
        osis_id: "Acts",
        variants: &["Acts", "Atos", "Act", "At", "Hechos", "Hch", "Деяния", "Дії"],
    },
    CanonicalBook {
        number: 45,
        standard_name: "Romans",
        short_name: "Rm",
        osis_id: "Rom",
        variants: &["Romans", "Romanos", "Rom", "Ro", "Римлянам"],
    },
    CanonicalBook {
        number: 46,
        standard_name: "1 Corinthians",
        short_name: "1Co",
        osis_id: "1Cor",
        variants: &[
            "1 Corinthians", "1 Coríntios", "1Corinthians", "1Co", "1 Cor", "I Corinthians",
            "1 Corintios", "1 Co", "1 Коринфянам", "1 Коринтян",
        ],
    },
    CanonicalBook {
        number: 47,
        standard_name: "2 Corinthians",
        short_name: "2Co",
        osis_id: "2Cor",
        variants: &[
            "2 Corinthians", "2 Coríntios", "2Corinthians", "2Co", "2 Cor", "II Corinthians",
            "2 Corintios", "2 Co", "2 Коринфянам", "2 Коринтян",
        ],
    },
    CanonicalBook {
        number: 48,
        standard_name: "Galatians",
        short_name: "Gl",
        osis_id: "Gal",
        variants: &["Galatians", "Gálatas", "Gal", "Ga", "Галатам"],
    },
    CanonicalBook {
        number: 49,
        standard_name: "Ephesians",
        short_name: "Ef",
        osis_id: "Eph",
        variants: &["Ephesians", "Efésios", "Eph", "Ep", "Efesios", "Ef", "Ефесянам"],
    },
    CanonicalBook {
        number: 50,
        standard_name: "Philippians",
        short_name: "Fp",
        osis_id: "Phil",
        variants: &["Philippians", "Filipenses", "Phil", "Php", "Flp", "Филиппийцам", "Филип'янам"],
    },
    CanonicalBook {
        number: 51,
        standard_name: "Colossians",
        short_name: "Cl",
        osis_id: "Col",
        variants: &["Colossians", "Colossenses", "Col", "Colosenses", "Колоссянам", "Колосянам"],
    },
    CanonicalBook {
        number: 52,
        standard_name: "1 Thessalonians",
        short_name: "1Ts",
        osis_id: "1Thess",
        variants: &[
            "1 Thessalonians", "1 Tessalonicenses", "1Thessalonians", "1Ts", "1 Thess",
            "I Thessalonians", "1 Tesalonicenses", "1 Ts", "1 Tes", "1 Фессалоникийцам",
            "1 Солунянам",
        ],
    },
    CanonicalBook {
        number: 53,
        standard_name: "2 Thessalonians",
        short_name: "2Ts",
        osis_id: "2Thess",
        variants: &[
            "2 Thessalonians", "2 Tessalonicenses", "2Thessalonians", "2Ts", "2 Thess",
            "II Thessalonians", "2 Tesalonicenses", "2 Ts", "2 Tes", "2 Фессалоникийцам",
            "2 Солунянам",
        ],
    },
    CanonicalBook {
        number: 54,
        standard_name: "1 Timothy",
        short_name: "1Tm",
        osis_id: "1Tim",
        variants: &[
            "1 Timothy", "1 Timóteo", "1Timothy", "1Tm", "1 Tim", "I Timothy", "1 Timoteo", "1 Ti",
            "1 Тимофею", "1 Тимофію",
        ],
    },
    CanonicalBook {
        number: 55,
        standard_name: "2 Timothy",
        short_name: "2Tm",
        osis_id: "2Tim",
        variants: &[
            "2 Timothy", "2 Timóteo", "2Timothy", "2Tm", "2 Tim", "II Timothy", "2 Timoteo", "2 Ti",
            "2 Тимофею", "2 Тимофію",
        ],
    },
    CanonicalBook {
        number: 56,
        standard_name: "Titus",
        short_name: "Tt",
        osis_id: "Titus",
        variants: &["Titus", "Tito", "Tt", "Tit", "Тит", "Титу", "Титові"],
    },
    CanonicalBook {
        number: 57,
        standard_name: "Philemon",
        short_name: "Fm",
        osis_id: "Phlm",
        variants: &[
            "Philemon", "Filemom", "Phlm", "Phm", "Filemón", "Flm", "Филимону", "Филимонові",
        ],
    },
    CanonicalBook {
        number: 58,
        standard_name: "Hebrews",
        short_name: "Hb",
        osis_id: "Heb",
        variants: &["Hebrews", "Hebreus", "Heb", "He", "Hebreos", "Евреям", "Євреям"],
    },
    CanonicalBook {
        number: 59,
        standard_name: "James",
        short_name: "Tg",
        osis_id: "Jas",
        variants: &["James", "Tiago", "Jas", "Ja", "Santiago", "Stg", "Иакова", "Якова"],
    },
    CanonicalBook {
        number: 60,
        standard_name: "1 Peter",
        short_name: "1Pe",
        osis_id: "1Pet",
        variants: &["1 Peter", "1 Pedro", "1Peter", "1Pe", "1 Pet", "I Peter", "1 Pe", "1 Петра"],
    },
    CanonicalBook {
        number: 61,
        standard_name: "2 Peter",
        short_name: "2Pe",
        osis_id: "2Pet",
        variants: &["2 Peter", "2 Pedro", "2Peter", "2Pe", "2 Pet", "II Peter", "2 Pe", "2 Петра"],
    },
    CanonicalBook {
        number: 62,
        standard_name: "1 John",
        short_name: "1Jo",
        osis_id: "1John",
        variants: &[
            "1 John", "1 João", "1John", "1Jo", "1 Jn", "I John", "1 Juan", "1 Иоанна", "1 Івана",
        ],
    },
    CanonicalBook {
        number: 63,
        standard_name: "2 John",
        short_name: "2Jo",
        osis_id: "2John",
        variants: &[
            "2 John", "2 João", "2John", "2Jo", "2 Jn", "II John", "2 Juan", "2 Иоанна", "2 Івана",
        ],
    },
    CanonicalBook {
        number: 64,
        standard_name: "3 John",
        short_name: "3Jo",
        osis_id: "3John",
        variants: &[
            "3 John", "3 João", "3John", "3Jo", "3 Jn", "III John", "3 Juan", "3 Иоанна", "3 Івана",
        ],
    },
    CanonicalBook {
        number: 65,
        standard_name: "Jude",
        short_name: "Jd",
        osis_id: "Jude",
        variants: &["Jude", "Judas", "Jd", "Jud", "Иуды", "Юди"],
    },
    CanonicalBook {
        number: 66,
        standard_name: "Revelation",
        short_name: "Ap",
        osis_id: "Rev",
        variants: &[
            "Revelation", "Apocalipse", "Rev", "Re", "Ap", "Apocalipsis", "Откровение",
            "Об'явлення", "Одкровення",
        ],
    },
];
