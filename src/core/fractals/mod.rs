pub mod ifs;
