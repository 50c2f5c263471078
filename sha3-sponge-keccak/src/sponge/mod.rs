pub mod prp;
