pub mod a001_material_type;
pub mod a002_material_reference;
pub mod a003_color;
pub mod a004_design;
pub mod a005_order;
pub mod common;
