//! Display color codes for every stimulus name.

/// Hex code for each stimulus name, as `#RRGGBB`.
///
/// Base entries (no distance suffix) stand in for the opposite-color
/// distractor, which is drawn from another color family.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("BLUE_LUM", "#4775D1"),
    ("BLUE_LUM_-2", "#28509F"),
    ("BLUE_LUM_-1", "#3060C0"),
    ("BLUE_LUM_+1", "#688ED9"),
    ("BLUE_LUM_+2", "#89A6E1"),
    ("BLUE_CHR", "#4775D1"),
    ("BLUE_CHR_-2", "#637EB6"),
    ("BLUE_CHR_-1", "#557AC3"),
    ("BLUE_CHR_+1", "#3A71DF"),
    ("BLUE_CHR_+2", "#2C6CED"),
    ("BLUE_HUE", "#4775D1"),
    ("BLUE_HUE_-2", "#47A3D1"),
    ("BLUE_HUE_-1", "#478CD1"),
    ("BLUE_HUE_+1", "#475ED1"),
    ("BLUE_HUE_+2", "#4747D1"),
    ("GREEN_LUM", "#34B249"),
    ("GREEN_LUM_-2", "#21732F"),
    ("GREEN_LUM_-1", "#2A923C"),
    ("GREEN_LUM_+1", "#45C95B"),
    ("GREEN_LUM_+2", "#65D277"),
    ("GREEN_CHR", "#34B249"),
    ("GREEN_CHR_-2", "#4F965B"),
    ("GREEN_CHR_-1", "#41A452"),
    ("GREEN_CHR_+1", "#26C03F"),
    ("GREEN_CHR_+2", "#18CD36"),
    ("GREEN_HUE", "#34B249"),
    ("GREEN_HUE_-2", "#49B234"),
    ("GREEN_HUE_-1", "#34B234"),
    ("GREEN_HUE_+1", "#34B25E"),
    ("GREEN_HUE_+2", "#34B273"),
    ("RED_LUM", "#D22D2D"),
    ("RED_LUM_-2", "#8F1E1E"),
    ("RED_LUM_-1", "#B12525"),
    ("RED_LUM_+1", "#DA4E4E"),
    ("RED_LUM_+2", "#E17070"),
    ("RED_CHR", "#D22D2D"),
    ("RED_CHR_-2", "#B44B4B"),
    ("RED_CHR_-1", "#C33C3C"),
    ("RED_CHR_+1", "#E21D1D"),
    ("RED_CHR_+2", "#F10E0E"),
    ("RED_HUE", "#D22D2D"),
    ("RED_HUE_-2", "#D22D64"),
    ("RED_HUE_-1", "#D22D48"),
    ("RED_HUE_+1", "#D2482D"),
    ("RED_HUE_+2", "#D2642D"),
    ("YELLOW_LUM", "#E8D030"),
    ("YELLOW_LUM_-2", "#B39E14"),
    ("YELLOW_LUM_-1", "#D8BE18"),
    ("YELLOW_LUM_+1", "#ECD855"),
    ("YELLOW_LUM_+2", "#F0E07A"),
    ("YELLOW_CHR", "#E8D030"),
    ("YELLOW_CHR_-2", "#CDBB4C"),
    ("YELLOW_CHR_-1", "#DAC53E"),
    ("YELLOW_CHR_+1", "#F6DA23"),
    ("YELLOW_CHR_+2", "#FFE01A"),
    ("YELLOW_HUE", "#E8D030"),
    ("YELLOW_HUE_-2", "#E89230"),
    ("YELLOW_HUE_-1", "#E8B130"),
    ("YELLOW_HUE_+1", "#E2E830"),
    ("YELLOW_HUE_+2", "#C3E830"),
];

/// True for `#` followed by exactly six hex digits.
pub fn is_hex_code(code: &str) -> bool {
    code.len() == 7
        && code.starts_with('#')
        && code[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}
