/// Identifier fields encoded in a room page's file name,
/// e.g. `cle-a224-classroom.php`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomIdent {
    pub short_name: String,
    pub room_number: String,
    pub room_type: String,
}

/// Parse `<building>-<room>-<type words...><suffix>` from the last path
/// segment of `url`. Returns `None` when fewer than three parts are present.
pub fn parse_ident(url: &str, suffix: &str) -> Option<RoomIdent> {
    let file = url.rsplit('/').next().unwrap_or(url);
    let stem = file.strip_suffix(suffix).unwrap_or(file);
    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 3 {
        return None;
    }

    Some(RoomIdent {
        short_name: parts[0].to_uppercase(),
        room_number: parts[1].to_uppercase(),
        room_type: title_case(&parts[2..].join(" ")),
    })
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
/// Digits and punctuation both end a run, so `lab2b` becomes `Lab2B`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
