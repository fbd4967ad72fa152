mod nominal_attribute_class_observer;

pub use nominal_attribute_class_observer::NominalAttributeClassObserver;
