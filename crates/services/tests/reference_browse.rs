use quiz_core::model::{Category, Level};
use services::ReferenceService;

#[test]
fn browsing_the_builtin_collection() {
    let service = ReferenceService::new(content::builtin_reference());

    assert_eq!(service.entries().len(), 10);
    assert_eq!(service.categories().len(), 3);

    let tools = service.by_category(Category::QualityTools);
    assert!(!tools.is_empty());
    assert!(tools.iter().all(|e| e.category == Category::QualityTools));

    let advanced_tools = service.filter(Some(Category::QualityTools), Some(Level::Advanced));
    assert!(advanced_tools.len() <= tools.len());
    assert!(advanced_tools.iter().all(|e| e.level == Level::Advanced));
}
