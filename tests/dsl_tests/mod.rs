mod design_test;
mod metadata_test;
