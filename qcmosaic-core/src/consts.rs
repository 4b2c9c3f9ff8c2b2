pub const TAG_SEPARATOR: char = '_';
pub const FIELD_SEPARATOR: char = '\t';

pub const QUAL_FEATURE: &str = "QUAL";

// tokens treated as Not-Available when parsing values
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "NA", "N/A", "NaN", "nan", "-nan", "-NaN", "null", "NULL", "#N/A",
];
