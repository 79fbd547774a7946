pub mod batch_import;
