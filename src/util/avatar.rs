//! Letter-avatar helpers: initial plus a stable background color per email.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Background palette, indexed by email hash.
pub const AVATAR_COLORS: [&str; 10] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#ec4899", "#6366f1", "#f97316", "#14b8a6",
    "#06b6d4",
];

/// Upper-cased first character of `name`, or `?` when empty.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// 32-bit string hash (`h * 31 + unit` with wrapping over UTF-16 units).
pub fn email_hash(email: &str) -> i32 {
    email
        .encode_utf16()
        .fold(0_i32, |acc, unit| acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(i32::from(unit)))
}

/// Palette color for `email`; the same email always gets the same color.
pub fn color_for(email: &str) -> &'static str {
    let hash = i64::from(email_hash(email)).unsigned_abs();
    let len = AVATAR_COLORS.len() as u64;
    #[allow(clippy::cast_possible_truncation)]
    let index = (hash % len) as usize;
    AVATAR_COLORS[index]
}

/// Friendly display name derived from an email's local part.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pixel size class for [`crate::components::user_avatar::UserAvatar`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "avatar avatar--sm",
            Self::Medium => "avatar avatar--md",
            Self::Large => "avatar avatar--lg",
        }
    }
}
