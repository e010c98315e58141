#[cfg(test)]
pub mod test {
    use crate::registry::FlagSet;

    /// A flag set covering every value type.
    pub fn sample_flags() -> FlagSet {
        let mut set = FlagSet::new("testapp");
        set.define("host", "localhost", "The application host.")
            .unwrap()
            .define("port", 8080, "The port number.")
            .unwrap()
            .define("debug", false, "Enable debug mode.")
            .unwrap()
            .define("timeout", 10, "Request timeout in seconds.")
            .unwrap()
            .define("name", "", "User name.")
            .unwrap()
            .define("ratio", 0.5, "Sampling ratio.")
            .unwrap()
            .define("retries", 3u64, "Retry count.")
            .unwrap();
        set
    }

    #[test]
    fn sample_flags_start_at_defaults() {
        let set = sample_flags();
        assert_eq!(set.get_str("host"), Some("localhost"));
        assert_eq!(set.get_int("port"), Some(8080));
        assert_eq!(set.get_bool("debug"), Some(false));
        assert_eq!(set.get_int("timeout"), Some(10));
        assert_eq!(set.get_str("name"), Some(""));
        assert_eq!(set.get_float("ratio"), Some(0.5));
        assert_eq!(set.get_uint("retries"), Some(3));
        assert_eq!(set.config_path(), "");
    }
}
