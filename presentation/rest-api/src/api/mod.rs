pub mod error;
pub mod listing;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod ingredient_type {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod ingredient {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recipe_category {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
