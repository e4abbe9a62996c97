pub mod sha256kit_cli;
