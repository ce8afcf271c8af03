pub mod fias;
