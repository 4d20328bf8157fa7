use eskema_dsl::parse;
use eskema_emit::{emitter_for, supported_languages, EmitOptions};
use proptest::prelude::*;

proptest! {
    /// Emitting whatever tree the parser salvaged never panics.
    #[test]
    fn emitters_accept_partial_trees(input in "[a-zA-Z0-9 <>,:;?{}@()\n]{0,160}") {
        let tree = parse(&input, "fuzz.skm").tree;
        for language in supported_languages() {
            let emitter = emitter_for(language, &EmitOptions::default()).unwrap();
            let _ = emitter.emit(&tree);
        }
    }

    /// The configured indent width is used for every indented line.
    #[test]
    fn indent_width_is_honored(indent in 1usize..8) {
        let tree = parse("schema S { a: Int8, b: Bool? }\nenum E { X, Y }", "s.skm").tree;
        let options = EmitOptions { package: None, indent };
        let pad = " ".repeat(indent);
        for language in supported_languages() {
            let out = emitter_for(language, &options).unwrap().emit(&tree);
            prop_assert!(out.lines().any(|l| l.starts_with(&pad)), "{}: {}", language, out);
            for line in out.lines() {
                let leading = line.len() - line.trim_start().len();
                prop_assert_eq!(leading % indent, 0, "{}: {:?}", language, line);
            }
        }
    }
}
