mod enhancement_service_test;
mod translation_service_test;
