pub mod application {
    pub mod ingredient_type {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_by_name;
        pub mod items;
        pub mod list;
        pub mod rename;
    }
    pub mod ingredient {
        pub mod add_stock;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_by_name;
        pub mod get_stock;
        pub mod list;
        pub mod remove_stock;
        pub mod update;
    }
    pub mod recipe_category {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_by_name;
        pub mod items;
        pub mod list;
        pub mod rename;
    }
    pub mod recipe {
        pub mod categories;
        pub mod check;
        pub mod cook;
        pub mod create;
        pub mod delete;
        pub mod get;
        pub mod ingredients;
        pub mod levels;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod listing;
        pub mod value_objects;
    }
    pub mod ingredient_type {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_by_name;
            pub mod items;
            pub mod list;
            pub mod rename;
        }
    }
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod stock;
        pub mod use_cases {
            pub mod add_stock;
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_by_name;
            pub mod get_stock;
            pub mod list;
            pub mod remove_stock;
            pub mod update;
        }
    }
    pub mod recipe_category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_by_name;
            pub mod items;
            pub mod list;
            pub mod rename;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod categories;
            pub mod check;
            pub mod cook;
            pub mod create;
            pub mod delete;
            pub mod get;
            pub mod ingredients;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
