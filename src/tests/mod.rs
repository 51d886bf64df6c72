mod mask_tests;
mod layout_tests;
mod entity_tests;
