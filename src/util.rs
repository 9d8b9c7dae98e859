pub fn is_digit(grapheme: &str) -> bool {
    // Note: built-in is_numeric() uses a more complicated unicode definition of
    // numeric.
    matches!(grapheme, "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9")
}
