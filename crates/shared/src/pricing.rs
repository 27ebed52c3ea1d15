//! Расчёт стоимости сборки

use serde::{Deserialize, Serialize};

use crate::variants::resolve_variant;
use crate::{Face, PriceTable, Unit, UnitId, WallAssignments};

/// Разбивка стоимости сборки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub unit_count: usize,
    /// Сумма базовых стоимостей модулей
    pub base_total: u64,
    /// Сумма надбавок за окна и двери
    pub modifications_total: u64,
    pub total: u64,
}

/// Надбавки за стены одного модуля. Крыша не учитывается.
fn modifications_price(unit: UnitId, walls: &WallAssignments, prices: &PriceTable) -> u64 {
    Face::WALLS
        .iter()
        .map(|&face| prices.variant_price(resolve_variant(walls, unit, face)))
        .sum()
}

/// Стоимость одного модуля: база плюс надбавки за стены
pub fn unit_price(unit: &Unit, walls: &WallAssignments, prices: &PriceTable) -> u64 {
    prices.base_unit + modifications_price(unit.id, walls, prices)
}

/// Общая стоимость сборки. Для пустой сборки 0.
pub fn total_price(units: &[Unit], walls: &WallAssignments, prices: &PriceTable) -> u64 {
    units.iter().map(|u| unit_price(u, walls, prices)).sum()
}

pub fn price_breakdown(units: &[Unit], walls: &WallAssignments, prices: &PriceTable) -> PriceBreakdown {
    let base_total = prices.base_unit * units.len() as u64;
    let modifications_total = units
        .iter()
        .map(|u| modifications_price(u.id, walls, prices))
        .sum();
    PriceBreakdown {
        unit_count: units.len(),
        base_total,
        modifications_total,
        total: base_total + modifications_total,
    }
}
