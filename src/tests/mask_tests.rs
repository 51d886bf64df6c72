use crate::components::{ComponentId, ComponentMask};

#[test]
pub fn set_clear_contains() {
	let mut mask = ComponentMask::EMPTY;
	assert!(mask.is_empty(), "A fresh mask should contain no ids");

	mask.set(ComponentId::new(3));
	mask.set(ComponentId::new(63));

	assert!(mask.contains(ComponentId::new(3)), "A set id should be contained");
	assert!(mask.contains(ComponentId::new(63)), "A set id should be contained");
	assert!(!mask.contains(ComponentId::new(4)), "An unset id should not be contained");
	assert_eq!(2, mask.len(), "The mask length should match the number of set ids");

	mask.clear(ComponentId::new(3));
	assert!(!mask.contains(ComponentId::new(3)), "A cleared id should not be contained");
	assert_eq!(1, mask.len(), "Clearing should decrement the mask length");
}

#[test]
pub fn superset_and_disjoint() {
	let small = ComponentMask::from_ids(&[ComponentId::new(1), ComponentId::new(5)]);
	let large = ComponentMask::from_ids(&[ComponentId::new(1), ComponentId::new(5), ComponentId::new(9)]);
	let other = ComponentMask::from_ids(&[ComponentId::new(2), ComponentId::new(10)]);

	assert!(large.contains_all(&small), "A superset should contain all ids of its subset");
	assert!(!small.contains_all(&large), "A subset should not contain all ids of its superset");
	assert!(large.contains_all(&large), "A mask should be its own superset");
	assert!(large.contains_all(&ComponentMask::EMPTY), "Any mask should contain the empty mask");

	assert!(small.is_disjoint(&other), "Masks with no shared ids should be disjoint");
	assert!(!large.is_disjoint(&small), "Masks with shared ids should not be disjoint");
}

#[test]
pub fn union_and_difference() {
	let a = ComponentMask::from_ids(&[ComponentId::new(0), ComponentId::new(2)]);
	let b = ComponentMask::from_ids(&[ComponentId::new(2), ComponentId::new(7)]);

	let union = a.union(&b);
	assert_eq!(3, union.len(), "The union should contain every id of both masks once");
	assert!(union.contains_all(&a) && union.contains_all(&b), "The union should be a superset of both masks");

	let difference = union.difference(&b);
	assert_eq!(
		ComponentMask::from_ids(&[ComponentId::new(0)]),
		difference,
		"The difference should remove exactly the ids of the subtracted mask"
	);
}

#[test]
pub fn iteration_is_ascending() {
	let ids = [ComponentId::new(42), ComponentId::new(0), ComponentId::new(17)];
	let mask = ComponentMask::from_ids(&ids);

	let visited: Vec<usize> = mask.iter().map(|id| id.value()).collect();
	assert_eq!(
		vec![0, 17, 42],
		visited,
		"Mask iteration should yield ids in ascending order"
	);
}
