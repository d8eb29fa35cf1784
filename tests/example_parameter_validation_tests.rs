#[cfg(test)]
mod tests {
    use domain_coloring::cli::explore::ExploreParams;
    use glob::glob;
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;

    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> Vec<T> {
        let pattern = format!("{}/**/*.json", directory);
        let mut parsed = Vec::new();

        // Each match must open and parse as the requested parameter type.
        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            match entry {
                Ok(path) => {
                    let content = fs::read_to_string(&path)
                        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

                    let result: Result<T, _> = serde_json::from_str(&content);

                    match result {
                        Ok(params) => parsed.push(params),
                        Err(err) => {
                            panic!(
                                "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                                path,
                                type_name::<T>(),
                                err
                            );
                        }
                    }
                }
                Err(e) => panic!("Failed to read path: {:?}. Check permissions.", e),
            }
        }
        parsed
    }

    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let all_params = parse_all_parameter_files_or_panic::<ExploreParams>("demos");
        assert!(!all_params.is_empty());
        for params in all_params {
            params
                .window
                .validate()
                .unwrap_or_else(|err| panic!("Invalid window in {:?}: {}", params.title, err));
        }
    }
}
