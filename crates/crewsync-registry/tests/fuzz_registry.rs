//! Property-based tests for registry mutation.

use proptest::prelude::*;
use serde_json::json;

use crewsync_registry::ToolRegistry;

proptest! {
    /// Registering a fresh name below capacity grows the list by exactly one.
    #[test]
    fn register_below_capacity_grows_by_one(name in "[A-Z][a-z]{3,12}", extra in 1usize..8) {
        let mut registry = ToolRegistry::new(6 + extra);
        prop_assume!(!registry.contains(&name));
        let before = registry.len();

        registry.register(name.clone(), "Specialist").expect("room available");

        prop_assert_eq!(registry.len(), before + 1);
        let invoked = registry.invoke(&name, &json!({}));
        prop_assert!(invoked.is_ok());
        prop_assert_eq!(registry.list().last().map(|d| d.name.as_str()), Some(name.as_str()));
    }

    /// Arbitrary arguments never panic a built-in handler.
    #[test]
    fn builtins_never_panic(text in "\\PC{0,64}", n in any::<i64>()) {
        let mut registry = ToolRegistry::default();
        for tool in ["sync_crew", "list_crew", "echo"] {
            let _ = registry.invoke(tool, &json!({"task": text, "text": n, "priority": text}));
            let _ = registry.invoke(tool, &json!([text]));
        }
    }
}
