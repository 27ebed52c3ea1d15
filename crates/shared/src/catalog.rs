//! Каталог геометрии и цен модуля

use serde::{Deserialize, Serialize};

use crate::{Face, FaceVariant};

/// Габариты модуля в метрах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDimensions {
    /// Длина вдоль оси X
    pub width: f64,
    /// Высота вдоль оси Y
    pub height: f64,
    /// Глубина вдоль оси Z
    pub depth: f64,
}

impl UnitDimensions {
    /// Стандартный модуль 6 × 2.5 × 2.5
    pub const STANDARD: UnitDimensions = UnitDimensions {
        width: 6.0,
        height: 2.5,
        depth: 2.5,
    };
}

impl Default for UnitDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Face {
    /// Единичная внешняя нормаль грани
    pub fn normal(self) -> [f64; 3] {
        match self {
            Face::Front => [0.0, 0.0, 1.0],
            Face::Back => [0.0, 0.0, -1.0],
            Face::Right => [1.0, 0.0, 0.0],
            Face::Left => [-1.0, 0.0, 0.0],
            Face::Roof => [0.0, 1.0, 0.0],
        }
    }

    /// Размер модуля вдоль оси грани
    pub fn extent(self, dims: &UnitDimensions) -> f64 {
        match self {
            Face::Front | Face::Back => dims.depth,
            Face::Left | Face::Right => dims.width,
            Face::Roof => dims.height,
        }
    }

    /// Смещение от центра модуля до центра грани
    pub fn offset(self, dims: &UnitDimensions) -> [f64; 3] {
        let half = self.extent(dims) / 2.0;
        let n = self.normal();
        [n[0] * half, n[1] * half, n[2] * half]
    }
}

/// Прайс-лист в рублях
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Базовая стоимость модуля
    pub base_unit: u64,
    /// Надбавка за стену с окном
    pub window: u64,
    /// Надбавка за стену с дверью
    pub door: u64,
}

impl PriceTable {
    pub const STANDARD: PriceTable = PriceTable {
        base_unit: 100_000,
        window: 15_000,
        door: 20_000,
    };

    /// Надбавка за вариант стены (базовая стена бесплатна)
    pub fn variant_price(&self, variant: FaceVariant) -> u64 {
        match variant {
            FaceVariant::Base => 0,
            FaceVariant::Window => self.window,
            FaceVariant::Door => self.door,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
