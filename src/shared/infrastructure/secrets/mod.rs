pub mod secret_file_reader;
