pub mod department;
pub mod employee;
pub mod payment;
pub mod salary;
pub mod webhook;
