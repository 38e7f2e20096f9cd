pub mod dynamics;
pub mod energy;
pub mod kinematics;
