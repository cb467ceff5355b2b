/// Static voice catalog: ElevenLabs voice id -> human readable name.
/// Loaded at compile time; unresolvable ids map to "Unknown" instead of
/// failing, so history rows always carry a displayable name.
pub const VOICES: &[(&str, &str)] = &[
    ("nPczCjzI2devNBz1zQrb", "Brian"),
    ("pFZP5JQG7iQjIQuC4Bku", "Lily"),
    ("XB0fDUnXU5powFXDhCwa", "Charlotte"),
    ("SAz9YHcvj6GT2YYXdXww", "River"),
    ("EXAVITQu4vr4xnSDxMaL", "Sarah"),
    ("onwK4e9ZLuTAKqWW03F9", "Daniel"),
    ("TX3LPaxmHKxFdv7VOQHJ", "Liam"),
    ("XrExE9yKIg1WjnnlVkGX", "Matilda"),
    ("pMsXgVXv3BLzUgSXRplE", "Premiumhindi"),
    ("JhdmE8AMBaGSnvtQQQgp", "Hindivoice"),
];

/// Supported ElevenLabs models
pub const MODELS: &[(&str, &str)] = &[
    ("eleven_multilingual_v2", "Multilingual v2"),
    ("eleven_turbo_v2_5", "Turbo v2.5"),
    ("eleven_turbo_v2", "Turbo v2"),
];

pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

pub fn resolve_voice_name(voice_id: &str) -> &'static str {
    VOICES
        .iter()
        .find(|(id, _)| *id == voice_id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_voice_name_known_id() {
        assert_eq!(resolve_voice_name("nPczCjzI2devNBz1zQrb"), "Brian");
        assert_eq!(resolve_voice_name("EXAVITQu4vr4xnSDxMaL"), "Sarah");
    }

    #[test]
    fn test_resolve_voice_name_unknown_id() {
        assert_eq!(resolve_voice_name("custom-cloned-voice"), "Unknown");
        assert_eq!(resolve_voice_name(""), "Unknown");
    }
}
