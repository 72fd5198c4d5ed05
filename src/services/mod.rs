pub mod salary;
pub mod seed;
pub mod solver;
pub mod webhook;
