pub mod machine;
pub mod nameplate;
pub mod substation;
