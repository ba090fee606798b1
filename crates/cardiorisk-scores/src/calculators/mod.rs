pub mod ascvd;
pub mod bmi;
pub mod cha2ds2_vasc;
pub mod egfr;
pub mod has_bled;
