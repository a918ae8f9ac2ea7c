mod input_object_type_validator_tests;
mod union_type_validator_tests;
