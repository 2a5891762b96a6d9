//! describes affectation of data to clusters

use std::collections::HashMap;
use std::hash::Hash;

/// The cluster affectation of any clustering scheme should be able to provide a structure implementing this trait.
///
/// Typically an affectation abstract a clusterization as something giving the label of the cluster attached to a dataid.
/// The DataId should satisfy the Hash trait. The label is an opaque discrete value, only compared for equality
/// (integers, strings, enums ...).
///
pub trait Affectation<DataId, DataLabel> {
    /// given a dataId, returns its label or cluster Id, None if dataid is not affected
    fn get_affectation(&self, dataid: DataId) -> Option<DataLabel>;
    /// returns number of points in clusters
    fn get_nb_points(&self) -> usize;
    /// iterator on couples (dataid, label)
    fn iter(&self) -> impl Iterator<Item = (DataId, DataLabel)>;
}

//==============================================================================

/// Clusters defined by a HashMap
#[derive(Clone, Debug)]
pub struct HashAffectation<DataId, DataLabel> {
    affectation: HashMap<DataId, DataLabel>,
}

impl<DataId, DataLabel> HashAffectation<DataId, DataLabel>
where
    DataId: Hash + Eq + Copy + Clone + Send + Sync + std::fmt::Debug,
    DataLabel: Hash + Eq + Clone + std::fmt::Debug,
{
    pub fn new(affectation: HashMap<DataId, DataLabel>) -> Self {
        HashAffectation { affectation }
    }
}

impl<DataId, DataLabel> Affectation<DataId, DataLabel> for HashAffectation<DataId, DataLabel>
where
    DataId: Hash + Eq + Copy + Clone + Send + Sync + std::fmt::Debug,
    DataLabel: Hash + Eq + Clone + std::fmt::Debug,
{
    fn get_affectation(&self, id: DataId) -> Option<DataLabel> {
        self.affectation.get(&id).cloned()
    }

    fn get_nb_points(&self) -> usize {
        self.affectation.len()
    }

    fn iter(&self) -> impl Iterator<Item = (DataId, DataLabel)> {
        self.affectation
            .iter()
            .map(|item| (*(item.0), item.1.clone()))
    }
}

//===============================================================================

// Affectation defined by a Vec<DataLabel>

/// Clusters defined by a Vec, DataId is an usize Vec\[i\] gives the label of the i-th data
#[derive(Clone, Debug)]
pub struct VecAffectation<DataLabel> {
    affectation: Vec<DataLabel>,
}

impl<DataLabel> VecAffectation<DataLabel>
where
    DataLabel: Hash + Eq + Clone + std::fmt::Debug,
{
    /// builds a vector affectation
    pub fn new(affectation: Vec<DataLabel>) -> Self {
        VecAffectation { affectation }
    }

    pub fn get_labels(&self) -> &[DataLabel] {
        &self.affectation
    }
}

impl<DataLabel> Affectation<usize, DataLabel> for VecAffectation<DataLabel>
where
    DataLabel: Hash + Eq + Clone + std::fmt::Debug,
{
    fn get_affectation(&self, id: usize) -> Option<DataLabel> {
        self.affectation.get(id).cloned()
    }

    fn get_nb_points(&self) -> usize {
        self.affectation.len()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, DataLabel)> {
        self.affectation.iter().cloned().enumerate()
    }
}

//===============================================================================

/// Clusters defined by a borrowed slice of labels. slice\[i\] gives the label of the i-th data.
/// Labels are handed out as references so no label is cloned when building a contingency table.
#[derive(Copy, Clone, Debug)]
pub struct SliceAffectation<'a, Label> {
    affectation: &'a [Label],
}

impl<'a, Label> SliceAffectation<'a, Label>
where
    Label: Hash + Eq + std::fmt::Debug,
{
    pub fn new(affectation: &'a [Label]) -> Self {
        SliceAffectation { affectation }
    }
}

impl<'a, Label> Affectation<usize, &'a Label> for SliceAffectation<'a, Label>
where
    Label: Hash + Eq + std::fmt::Debug,
{
    fn get_affectation(&self, id: usize) -> Option<&'a Label> {
        self.affectation.get(id)
    }

    fn get_nb_points(&self) -> usize {
        self.affectation.len()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, &'a Label)> {
        self.affectation.iter().enumerate()
    }
} // end of impl Affectation for SliceAffectation

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn vec_and_slice_agree() {
        let labels = vec!["a", "b", "a"];
        let v = VecAffectation::new(labels.clone());
        let s = SliceAffectation::new(&labels);
        assert_eq!(v.get_nb_points(), s.get_nb_points());
        for ((i1, l1), (i2, l2)) in v.iter().zip(s.iter()) {
            assert_eq!(i1, i2);
            assert_eq!(l1, *l2);
        }
        assert_eq!(v.get_affectation(3), None);
        assert_eq!(s.get_affectation(2), Some(&"a"));
    }

    #[test]
    fn hash_affectation() {
        let mut map = HashMap::<u64, String>::new();
        map.insert(10, "x".to_string());
        map.insert(20, "y".to_string());
        let h = HashAffectation::new(map);
        assert_eq!(h.get_nb_points(), 2);
        assert_eq!(h.get_affectation(20), Some("y".to_string()));
        assert_eq!(h.get_affectation(30), None);
        assert_eq!(h.iter().count(), 2);
    }
} // end of mod tests
