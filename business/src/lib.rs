pub mod application {
    pub mod browser;
    pub mod favorite {
        pub mod store;
    }
    pub mod recipe {
        pub mod filter_by_category;
        pub mod get_detail;
        pub mod list_categories;
        pub mod load_random;
        pub mod search;
    }
    pub mod render {
        pub mod coordinator;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod storage;
        pub mod store;
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod filter_by_category;
            pub mod get_detail;
            pub mod list_categories;
            pub mod load_random;
            pub mod search;
        }
    }
    pub mod render {
        pub mod detail;
        pub mod model;
        pub mod target;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
