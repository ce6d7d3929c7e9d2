/// English ordinal, e.g. `1st`, `2nd`, `11th`, `23rd`.
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{}{}", n, suffix)
}

/// Word used in "to force ___ overtime". The first overtime has no qualifier.
pub fn overtime_counter(n: usize) -> String {
    match n {
        0 | 1 => String::new(),
        2 => "double".to_string(),
        3 => "triple".to_string(),
        4 => "quadruple".to_string(),
        5 => "quintuple".to_string(),
        6 => "sextuple".to_string(),
        7 => "septuple".to_string(),
        8 => "octuple".to_string(),
        _ => format!("{} consecutive", ordinal(n)),
    }
}

/// Formats minutes remaining on the game clock as `M:SS`.
pub fn clock_text(minutes: f64) -> String {
    let minutes = minutes.max(0.0);
    let whole = minutes.floor();
    let seconds = ((minutes - whole) * 60.0).floor() as u32;

    format!("{}:{:02}", whole as u32, seconds)
}
