//! Plant drawings, one per growth stage.
//!
//! Every drawing has the same height and width so the today view does not
//! jump around when the plant grows.

use crate::model::streak::GrowthStage;

/// Rows in every drawing
pub const PLANT_HEIGHT: usize = 9;
/// Columns in every drawing
pub const PLANT_WIDTH: usize = 15;

const POT: [&str; 2] = [r"  [=========]  ", r"   \_______/   "];

const STAGE1: [&str; 7] = [
    "",
    "",
    "",
    "",
    "",
    "",
    r"       .       ",
];

const STAGE2: [&str; 7] = [
    "",
    "",
    "",
    "",
    "",
    r"      \,       ",
    r"       |       ",
];

const STAGE3: [&str; 7] = [
    "",
    "",
    "",
    "",
    r"      \ /      ",
    r"       |       ",
    r"       |       ",
];

const STAGE4: [&str; 7] = [
    "",
    "",
    "",
    r"     _\ /_     ",
    r"       |/      ",
    r"      \|       ",
    r"       |       ",
];

const STAGE5: [&str; 7] = [
    "",
    "",
    r"     \\|//     ",
    r"     _\|/_     ",
    r"      \|/      ",
    r"     --|       ",
    r"       |       ",
];

const STAGE6: [&str; 7] = [
    "",
    r"      .-.      ",
    r"    \(   )/    ",
    r"    _\'-'/_    ",
    r"      \|/      ",
    r"     --|--     ",
    r"       |       ",
];

const STAGE7: [&str; 7] = [
    r"    .-. .-.    ",
    r"   (   *   )   ",
    r"  \ '-.|.-' /  ",
    r"   \_ \|/ _/   ",
    r"     \\|//     ",
    r"     --|--     ",
    r"       |       ",
];

/// Resolve a growth stage to its drawing, top row first.
pub fn plant_art(stage: GrowthStage) -> Vec<&'static str> {
    let growth = match stage {
        GrowthStage::Stage1 => &STAGE1,
        GrowthStage::Stage2 => &STAGE2,
        GrowthStage::Stage3 => &STAGE3,
        GrowthStage::Stage4 => &STAGE4,
        GrowthStage::Stage5 => &STAGE5,
        GrowthStage::Stage6 => &STAGE6,
        GrowthStage::Stage7 => &STAGE7,
    };
    growth.iter().chain(POT.iter()).copied().collect()
}
