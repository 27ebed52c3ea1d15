use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use shared::{Face, FaceVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ru,
    En,
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Lang::Ru),
            "en" => Ok(Lang::En),
            other => Err(format!("unknown language '{other}' (expected ru or en)")),
        }
    }
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    t_in(lang(), key)
}

/// Translate a key to an explicit language.
pub fn t_in(lang: Lang, key: &str) -> &'static str {
    let ru = lang == Lang::Ru;
    match key {
        // ── Faces ───────────────────────────────────────────
        "face.front" => if ru { "передняя стена" } else { "front wall" },
        "face.back" => if ru { "задняя стена" } else { "back wall" },
        "face.left" => if ru { "левая стена" } else { "left wall" },
        "face.right" => if ru { "правая стена" } else { "right wall" },
        "face.roof" => if ru { "крыша" } else { "roof" },

        // ── Variants ────────────────────────────────────────
        "variant.base" => if ru { "Базовая" } else { "Base" },
        "variant.window" => if ru { "С окном" } else { "With window" },
        "variant.door" => if ru { "С дверью" } else { "With door" },

        // ── Report ──────────────────────────────────────────
        "report.title" => if ru { "Схема сборки контейнеров" } else { "Container assembly plan" },
        "report.count" => if ru { "Общее количество" } else { "Total units" },
        "report.total" => if ru { "Общая стоимость" } else { "Total price" },
        "report.generated" => if ru { "Дата генерации (Unix)" } else { "Generated at (Unix)" },
        "report.details" => if ru { "Детали сборки" } else { "Assembly details" },
        "report.unit" => if ru { "Контейнер" } else { "Unit" },
        "report.position" => if ru { "позиция" } else { "position" },
        "report.no_mods" => if ru { "без модификаций" } else { "no modifications" },
        "report.thousands" => if ru { "тыс. рублей" } else { "thousand rubles" },
        "report.currency" => if ru { "руб." } else { "RUB" },

        // ── Status ──────────────────────────────────────────
        "status.no_unit" => if ru { "Контейнер не выбран" } else { "No unit selected" },
        "status.unit" => if ru { "Выбран контейнер" } else { "Selected unit" },
        "status.face" => if ru { "Выбрана" } else { "Selected" },
        "status.roof_hint" => if ru { "Можно добавить контейнер сверху" } else { "A unit can be stacked on top" },

        // ── Errors ──────────────────────────────────────────
        "err.no_face" => if ru { "Сначала выберите стену или крышу!" } else { "Select a wall or the roof first!" },
        "err.roof_variant" => if ru { "Крыше нельзя назначить окно или дверь" } else { "The roof cannot have a window or a door" },
        "err.unknown_unit" => if ru { "Контейнер не найден" } else { "Unit not found" },
        "err.duplicate_unit" => if ru { "Повторяющийся контейнер" } else { "Duplicate unit" },
        "err.id_space" => if ru { "Закончились номера контейнеров" } else { "No unit ids left" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

/// Localized face name.
pub fn face_label(lang: Lang, face: Face) -> &'static str {
    match face {
        Face::Front => t_in(lang, "face.front"),
        Face::Back => t_in(lang, "face.back"),
        Face::Left => t_in(lang, "face.left"),
        Face::Right => t_in(lang, "face.right"),
        Face::Roof => t_in(lang, "face.roof"),
    }
}

/// Localized wall variant name.
pub fn variant_label(lang: Lang, variant: FaceVariant) -> &'static str {
    match variant {
        FaceVariant::Base => t_in(lang, "variant.base"),
        FaceVariant::Window => t_in(lang, "variant.window"),
        FaceVariant::Door => t_in(lang, "variant.door"),
    }
}

/// User-facing message for a core error.
pub fn error_message(lang: Lang, err: &shared::ConfiguratorError) -> &'static str {
    use shared::ConfiguratorError::*;
    match err {
        NoFaceSelected => t_in(lang, "err.no_face"),
        InvalidFaceForVariant { .. } => t_in(lang, "err.roof_variant"),
        UnknownUnit(_) => t_in(lang, "err.unknown_unit"),
        DuplicateUnit(_) => t_in(lang, "err.duplicate_unit"),
        IdSpaceExhausted => t_in(lang, "err.id_space"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_face_and_variant_has_labels() {
        for lang in [Lang::Ru, Lang::En] {
            for face in Face::ALL {
                assert_ne!(face_label(lang, face), "???");
            }
            for variant in FaceVariant::ALL {
                assert_ne!(variant_label(lang, variant), "???");
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(t_in(Lang::En, "no.such.key"), "???");
    }

    #[test]
    fn test_lang_from_str() {
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("ru".parse::<Lang>(), Ok(Lang::Ru));
        assert!("de".parse::<Lang>().is_err());
    }

    #[test]
    fn test_error_messages() {
        let msg = error_message(Lang::En, &shared::ConfiguratorError::NoFaceSelected);
        assert_eq!(msg, "Select a wall or the roof first!");
        let msg = error_message(Lang::Ru, &shared::ConfiguratorError::IdSpaceExhausted);
        assert_ne!(msg, "???");
    }
}
