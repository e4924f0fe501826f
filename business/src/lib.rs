pub mod application {
    pub mod credentials {
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod credentials {
        pub mod env_file;
        pub mod errors;
        pub mod model;
        pub mod reporter;
        pub mod repository;
        pub mod use_cases {
            pub mod update;
        }
    }
}
