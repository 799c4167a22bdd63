mod catalog_test;
mod favorite_test;
mod helpers;
