pub mod text_normalization;
