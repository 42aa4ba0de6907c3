pub mod db;
pub mod listing;
pub mod ingredient_type {
    pub mod entity;
    pub mod repository;
}
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod stock {
    pub mod entity;
    pub mod repository;
}
pub mod recipe_category {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
