mod dictionary_tests;
mod health_tests;
