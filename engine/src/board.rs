//! Board layout for renderers. Cells carry coordinates only; nothing here
//! affects play.

use serde::{Deserialize, Serialize};

use crate::rules::GOAL;

pub const BOARD_HEIGHT: i32 = 700;
pub const MARGIN: i32 = 80;
pub const STEP: i32 = 60;

/// One board position. The start cell is labelled 🟢, the goal 🔴, the rest
/// by number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    pub id: u8,
    pub x: i32,
    pub y: i32,
    pub label: String,
}

fn label(id: u8) -> String {
    match id {
        0 => "🟢".into(),
        GOAL => "🔴".into(),
        n => n.to_string(),
    }
}

/// Path in legs of four: right, down-right, up-right, down, up-left,
/// down-left, up-left back toward the start column.
fn coords(id: u8) -> (i32, i32) {
    let mid = BOARD_HEIGHT / 2;
    let i = id as i32;
    let step = (i - 1) % 4 + 1;
    match id {
        0 => (MARGIN, mid),
        1..=4 => (MARGIN + i * STEP, mid),
        5..=8 => (MARGIN + (4 + step) * STEP, mid + step * STEP),
        9..=12 => (MARGIN + (8 + step) * STEP, mid + (4 - step) * STEP),
        13..=16 => (MARGIN + 12 * STEP, mid + step * STEP),
        17..=20 => (MARGIN + (12 - step) * STEP, mid + (4 - step) * STEP),
        21..=24 => (MARGIN + (8 - step) * STEP, mid + step * STEP),
        _ => (MARGIN + (4 - step) * STEP, mid + (4 - step) * STEP),
    }
}

pub fn cell(id: u8) -> Option<Cell> {
    if id > GOAL { return None; }
    let (x, y) = coords(id);
    Some(Cell { id, x, y, label: label(id) })
}

pub fn cells() -> Vec<Cell> { (0..=GOAL).filter_map(cell).collect() }
