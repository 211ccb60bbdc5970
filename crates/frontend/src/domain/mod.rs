pub mod a001_hook;
