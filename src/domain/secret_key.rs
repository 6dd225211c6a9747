use nanoid::nanoid;

/// Letters and digits a generated secret is drawn from.
const SECRET_ALPHABET: [char; 62] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9',
];

pub const SECRET_KEY_PREFIX: char = '_';
pub const SECRET_KEY_LENGTH: usize = 64;

/// Env entry holding the Django `SECRET_KEY`.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Generate a Django secret key: `_` followed by 64 letters and digits.
///
/// Characters come from the thread-local CSPRNG that backs `nanoid`.
pub fn generate_secret() -> String {
    format!("{}{}", SECRET_KEY_PREFIX, nanoid!(SECRET_KEY_LENGTH, &SECRET_ALPHABET))
}
