use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod variants;

pub use catalog::{PriceTable, UnitDimensions};
pub use error::ConfiguratorError;
pub use pricing::{price_breakdown, total_price, unit_price, PriceBreakdown};
pub use variants::{active_parts, assign_variant, part_key, resolve_variant, BASE_PARTS};

/// Уникальный идентификатор модуля в сборке
pub type UnitId = u64;

/// Грань модуля, к которой можно пристыковать соседа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Roof,
}

impl Face {
    /// Все грани, включая крышу
    pub const ALL: [Face; 5] = [Face::Front, Face::Back, Face::Left, Face::Right, Face::Roof];

    /// Только стены (крыша не настраивается)
    pub const WALLS: [Face; 4] = [Face::Front, Face::Back, Face::Left, Face::Right];

    /// Является ли грань стеной
    pub fn is_wall(self) -> bool {
        !matches!(self, Face::Roof)
    }

    /// Имя грани в нижнем регистре (совпадает с сериализацией)
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Roof => "roof",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Вариант исполнения стены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceVariant {
    #[default]
    Base,
    Window,
    Door,
}

impl FaceVariant {
    pub const ALL: [FaceVariant; 3] = [FaceVariant::Base, FaceVariant::Window, FaceVariant::Door];

    pub fn as_str(self) -> &'static str {
        match self {
            FaceVariant::Base => "base",
            FaceVariant::Window => "window",
            FaceVariant::Door => "door",
        }
    }
}

impl std::fmt::Display for FaceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Модуль сборки. Позиция задаётся один раз при создании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Центр модуля в мировых координатах
    pub position: [f64; 3],
}

/// Назначенные варианты стен: модуль → (грань → вариант).
/// Отсутствие записи означает `FaceVariant::Base`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallAssignments(BTreeMap<UnitId, BTreeMap<Face, FaceVariant>>);

impl WallAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Явно назначенный вариант (без подстановки значения по умолчанию)
    pub fn get(&self, unit: UnitId, face: Face) -> Option<FaceVariant> {
        self.0.get(&unit)?.get(&face).copied()
    }

    /// Все записи одного модуля
    pub fn unit_walls(&self, unit: UnitId) -> Option<&BTreeMap<Face, FaceVariant>> {
        self.0.get(&unit)
    }

    /// Удалить все записи модуля. Возвращает true, если что-то удалено.
    pub fn remove_unit(&mut self, unit: UnitId) -> bool {
        self.0.remove(&unit).is_some()
    }

    /// Идентификаторы модулей, у которых есть записи
    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.0.keys().copied()
    }

    /// Все записи в порядке (модуль, грань)
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, Face, FaceVariant)> + '_ {
        self.0
            .iter()
            .flat_map(|(&unit, faces)| faces.iter().map(move |(&face, &v)| (unit, face, v)))
    }

    /// Модификации модуля: только варианты, отличные от базового
    pub fn modifications(&self, unit: UnitId) -> Vec<(Face, FaceVariant)> {
        self.0
            .get(&unit)
            .map(|faces| {
                faces
                    .iter()
                    .filter(|(_, v)| **v != FaceVariant::Base)
                    .map(|(&f, &v)| (f, v))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Количество записей
    pub fn len(&self) -> usize {
        self.0.values().map(|faces| faces.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Вставка доступна только резолверу вариантов, который проверяет крышу.
    pub(crate) fn insert(&mut self, unit: UnitId, face: Face, variant: FaceVariant) {
        self.0.entry(unit).or_default().insert(face, variant);
    }
}

fn default_version() -> u32 {
    1
}

/// Описание сборки: сериализуемый снимок модулей и вариантов стен
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyDescription {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: u32,
    /// Модули в порядке добавления
    pub units: Vec<Unit>,
    /// Варианты стен
    #[serde(default)]
    pub walls: WallAssignments,
}

impl Default for AssemblyDescription {
    fn default() -> Self {
        Self {
            version: default_version(),
            units: Vec::new(),
            walls: WallAssignments::default(),
        }
    }
}

impl AssemblyDescription {
    /// Найти модуль по идентификатору
    pub fn get_unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.iter().any(|u| u.id == id)
    }

    /// Наибольший идентификатор в сборке (0 для пустой)
    pub fn max_id(&self) -> UnitId {
        self.units.iter().map(|u| u.id).max().unwrap_or(0)
    }

    /// Проверить инварианты загруженного описания:
    /// уникальные идентификаторы, записи стен только для живых модулей,
    /// крыша без вариантов кроме базового.
    pub fn check_invariants(&self) -> Result<(), ConfiguratorError> {
        let mut seen = HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit.id) {
                return Err(ConfiguratorError::DuplicateUnit(unit.id));
            }
        }
        for (unit, face, variant) in self.walls.iter() {
            if !seen.contains(&unit) {
                return Err(ConfiguratorError::UnknownUnit(unit));
            }
            if face == Face::Roof && variant != FaceVariant::Base {
                return Err(ConfiguratorError::InvalidFaceForVariant { face, variant });
            }
        }
        Ok(())
    }
}
