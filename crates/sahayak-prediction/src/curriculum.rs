//! Bundled state-board chapter tables.
//!
//! Ordered chapter lists per (grade, subject). Grades and subjects with no
//! table yield an empty slice.

/// One chapter of a subject's yearly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

const fn ch(number: u32, title: &'static str, topics: &'static [&'static str]) -> Chapter {
    Chapter {
        number,
        title,
        topics,
    }
}

const GRADE_6_MATHS: &[Chapter] = &[
    ch(1, "Knowing Our Numbers", &["place value", "comparing numbers", "large numbers"]),
    ch(2, "Whole Numbers", &["number line", "properties of whole numbers"]),
    ch(3, "Playing with Numbers", &["factors", "multiples", "prime numbers"]),
    ch(4, "Basic Geometrical Ideas", &["points", "lines", "angles", "triangles"]),
    ch(5, "Understanding Elementary Shapes", &["measuring angles", "perpendicular lines"]),
    ch(6, "Integers", &["negative numbers", "number line", "addition of integers"]),
    ch(7, "Fractions", &["types of fractions", "equivalent fractions", "comparing fractions"]),
    ch(8, "Decimals", &["decimal notation", "comparing decimals", "addition"]),
    ch(9, "Data Handling", &["pictograph", "bar graph", "mean"]),
    ch(10, "Mensuration", &["perimeter", "area", "rectangles"]),
    ch(11, "Algebra", &["variables", "expressions", "equations"]),
    ch(12, "Ratio and Proportion", &["ratio", "proportion", "unitary method"]),
];

const GRADE_6_SCIENCE: &[Chapter] = &[
    ch(1, "Food: Where Does It Come From?", &["food sources", "food variety", "ingredients"]),
    ch(2, "Components of Food", &["nutrients", "balanced diet", "deficiency diseases"]),
    ch(3, "Fibre to Fabric", &["plant fibres", "cotton", "jute", "spinning"]),
    ch(4, "Sorting Materials into Groups", &["properties of materials", "classification"]),
    ch(5, "Separation of Substances", &["filtration", "evaporation", "sedimentation"]),
    ch(6, "Changes Around Us", &["reversible changes", "irreversible changes"]),
    ch(7, "Getting to Know Plants", &["parts of plant", "types of plants", "photosynthesis"]),
    ch(8, "Body Movements", &["skeleton", "joints", "muscles"]),
    ch(9, "Living Organisms", &["habitats", "adaptation", "characteristics of living"]),
    ch(10, "Motion and Measurement", &["types of motion", "measurement units"]),
];

const GRADE_6_HINDI: &[Chapter] = &[
    ch(1, "वह चिड़िया जो", &["कविता", "पक्षी", "प्रकृति"]),
    ch(2, "बचपन", &["संस्मरण", "बचपन की यादें"]),
    ch(3, "नादान दोस्त", &["कहानी", "मित्रता", "जिम्मेदारी"]),
    ch(4, "चाँद से थोड़ी सी गप्पें", &["कविता", "कल्पना", "चंद्रमा"]),
];

const GRADE_6_ENGLISH: &[Chapter] = &[
    ch(1, "Who Did Patrick's Homework?", &["story", "fairy", "homework"]),
    ch(2, "How the Dog Found Himself a New Master", &["story", "loyalty", "animals"]),
    ch(3, "Taro's Reward", &["Japanese folktale", "respect", "parents"]),
    ch(4, "An Indian-American Woman in Space", &["Kalpana Chawla", "biography", "space"]),
];

const GRADE_5_MATHS: &[Chapter] = &[
    ch(1, "The Fish Tale", &["numbers", "shapes", "patterns"]),
    ch(2, "Shapes and Angles", &["angles", "right angle", "straight angle"]),
    ch(3, "How Many Squares?", &["area", "squares", "counting"]),
    ch(4, "Parts and Wholes", &["fractions", "parts", "sharing"]),
    ch(5, "Does it Look the Same?", &["symmetry", "reflection", "patterns"]),
];

const GRADE_5_EVS: &[Chapter] = &[
    ch(1, "Super Senses", &["senses", "animals", "adaptation"]),
    ch(2, "A Snake Charmer's Story", &["snakes", "conservation", "livelihood"]),
    ch(3, "From Tasting to Digesting", &["digestion", "food", "taste"]),
    ch(4, "Mangoes Round the Year", &["preservation", "food storage", "seasons"]),
];

/// Chapters for `grade` and `subject`, in teaching order. Unknown → empty.
pub fn chapters(grade: u8, subject: &str) -> &'static [Chapter] {
    match (grade, subject) {
        (6, "maths") => GRADE_6_MATHS,
        (6, "science") => GRADE_6_SCIENCE,
        (6, "hindi") => GRADE_6_HINDI,
        (6, "english") => GRADE_6_ENGLISH,
        (5, "maths") => GRADE_5_MATHS,
        (5, "evs") => GRADE_5_EVS,
        _ => &[],
    }
}

/// Subjects that have a chapter table for `grade`.
pub fn subjects(grade: u8) -> &'static [&'static str] {
    match grade {
        6 => &["maths", "science", "hindi", "english"],
        5 => &["maths", "evs"],
        _ => &[],
    }
}
