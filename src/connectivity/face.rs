//! Face-to-element connectivity

use crate::connectivity::NodeConnectivity;
use crate::error::{ConnectivityError, Result};
use crate::mesh::Entities;
use crate::reference_cell;
use crate::types::{ElementRef, RealScalar};
use log::debug;

/// Resolve, for every local face of every element in `own_elements`, the
/// neighbouring element sharing that face and the matching local face index
/// on the neighbour
///
/// Returns `(face_has_neighbour, face_element_connectivity,
/// face_face_connectivity)`, indexed by `element * nb_faces + face`. The
/// latter two are only meaningful where the first is true.
///
/// Candidates are gathered as a flat multiset of element references, one
/// occurrence per node the candidate shares with the face, then sorted and
/// scanned in runs: only a candidate sharing every node of the face (run
/// length equal to the face stride) can be face-adjacent. A surviving
/// candidate is accepted only if one of its own faces lists the same nodes in
/// matching orientation: reversed when both sets have equal topological
/// dimensionality, identical otherwise, after rotating faces of more than two
/// nodes to a common starting node.
///
/// In non-manifold configurations a face can match more than one candidate;
/// the last match in scan order silently wins.
pub fn build_face_element_adjacency<T: RealScalar>(
    own_elements: &Entities<T>,
    node_connectivity: &NodeConnectivity<'_, T>,
) -> Result<(Vec<bool>, Vec<ElementRef>, Vec<usize>)> {
    let cell_type = own_elements.cell_type();
    let nb_faces = reference_cell::face_count(cell_type);
    let own_dimensionality = reference_cell::dimensionality(cell_type);
    let nb_nodes = node_connectivity.nb_nodes();
    let entities = node_connectivity.entities();
    // The own set is recognised by identity, not by value.
    let own_index = entities
        .iter()
        .position(|set| std::ptr::eq(*set, own_elements));

    let nb_global_faces = own_elements.size() * nb_faces;
    let mut face_has_neighbour = vec![false; nb_global_faces];
    let mut face_element_connectivity = vec![ElementRef::default(); nb_global_faces];
    let mut face_face_connectivity = vec![0; nb_global_faces];

    let mut face_nodes = Vec::new();
    let mut adjacent_elements = Vec::new();
    let mut candidate_face_nodes = Vec::new();
    let mut nb_overwritten = 0;

    for element in 0..own_elements.size() {
        let row = own_elements.connectivity_row(element);
        for face in 0..nb_faces {
            face_nodes.clear();
            for &local in reference_cell::face_nodes(cell_type, face) {
                let node = row[local];
                if node >= nb_nodes {
                    return Err(ConnectivityError::NodeIndexOutOfRange { node, nb_nodes });
                }
                face_nodes.push(node);
            }
            let stride = face_nodes.len();

            // One occurrence per shared node, so a run of length `stride`
            // means the candidate shares the whole face.
            adjacent_elements.clear();
            for &node in &face_nodes {
                adjacent_elements.extend_from_slice(node_connectivity.node_element_range(node));
            }
            adjacent_elements.sort_unstable();

            let index = element * nb_faces + face;
            let mut run_start = 0;
            while run_start < adjacent_elements.len() {
                let candidate = adjacent_elements[run_start];
                let mut run_end = run_start + 1;
                while run_end < adjacent_elements.len() && adjacent_elements[run_end] == candidate {
                    run_end += 1;
                }
                let run_length = run_end - run_start;
                run_start = run_end;

                if own_index == Some(candidate.entities_index())
                    && candidate.element_index() == element
                {
                    continue;
                }
                if run_length != stride {
                    continue;
                }

                let candidate_set = entities[candidate.entities_index()];
                let candidate_type = candidate_set.cell_type();
                let candidate_row = candidate_set.connectivity_row(candidate.element_index());
                let equal_dimensionality =
                    reference_cell::dimensionality(candidate_type) == own_dimensionality;

                for adjacent_face in 0..reference_cell::face_count(candidate_type) {
                    let local_nodes = reference_cell::face_nodes(candidate_type, adjacent_face);
                    if local_nodes.len() != stride {
                        continue;
                    }
                    candidate_face_nodes.clear();
                    candidate_face_nodes.extend(local_nodes.iter().map(|&local| candidate_row[local]));
                    // Cells of equal dimensionality see a shared face in
                    // opposite orientation; a cell and a boundary patch see
                    // it in the same orientation.
                    if equal_dimensionality {
                        candidate_face_nodes.reverse();
                    }
                    if stride > 2 {
                        match candidate_face_nodes.iter().position(|&n| n == face_nodes[0]) {
                            Some(offset) => candidate_face_nodes.rotate_left(offset),
                            None => continue,
                        }
                    }
                    if candidate_face_nodes == face_nodes {
                        if face_has_neighbour[index] {
                            nb_overwritten += 1;
                        }
                        face_has_neighbour[index] = true;
                        face_element_connectivity[index] = candidate;
                        face_face_connectivity[index] = adjacent_face;
                    }
                }
            }
        }
    }

    if nb_overwritten > 0 {
        debug!("{nb_overwritten} faces matched more than one neighbour; kept the last match");
    }
    debug!(
        "built face-element adjacency: {} elements, {} faces, {} with neighbour",
        own_elements.size(),
        nb_global_faces,
        face_has_neighbour.iter().filter(|&&h| h).count()
    );
    Ok((face_has_neighbour, face_element_connectivity, face_face_connectivity))
}

/// Recompute the matching local face index on each neighbour, given that the
/// neighbouring elements themselves are already known
///
/// Where the neighbour belongs to `own_elements` itself, the symmetric entry
/// of the adjacency table identifies the face directly; otherwise the face is
/// found by comparing sorted node sets, since only existence of the match is
/// in question.
pub fn build_face_face_adjacency<T: RealScalar>(
    own_elements: &Entities<T>,
    entities: &[&Entities<T>],
    face_has_neighbour: &[bool],
    face_element_connectivity: &[ElementRef],
) -> Vec<usize> {
    let cell_type = own_elements.cell_type();
    let nb_faces = reference_cell::face_count(cell_type);
    let own_index = entities
        .iter()
        .position(|set| std::ptr::eq(*set, own_elements));

    let mut face_face_connectivity = vec![0; face_has_neighbour.len()];
    let mut face_nodes = Vec::new();
    let mut neighbour_face_nodes = Vec::new();

    for element in 0..own_elements.size() {
        let row = own_elements.connectivity_row(element);
        for face in 0..nb_faces {
            let index = element * nb_faces + face;
            if !face_has_neighbour[index] {
                continue;
            }
            let neighbour = face_element_connectivity[index];

            // Fast path: the neighbour's own entry points back here.
            if own_index == Some(neighbour.entities_index()) {
                let back_reference = ElementRef::new(neighbour.entities_index(), element);
                let mut found = false;
                for neighbour_face in 0..nb_faces {
                    let neighbour_index = neighbour.element_index() * nb_faces + neighbour_face;
                    if face_has_neighbour[neighbour_index]
                        && face_element_connectivity[neighbour_index] == back_reference
                    {
                        face_face_connectivity[index] = neighbour_face;
                        found = true;
                        break;
                    }
                }
                // Symmetry can be broken by non-manifold overwrites.
                if found {
                    continue;
                }
            }

            face_nodes.clear();
            face_nodes.extend(
                reference_cell::face_nodes(cell_type, face)
                    .iter()
                    .map(|&local| row[local]),
            );
            face_nodes.sort_unstable();

            let neighbour_set = entities[neighbour.entities_index()];
            let neighbour_type = neighbour_set.cell_type();
            let neighbour_row = neighbour_set.connectivity_row(neighbour.element_index());
            for neighbour_face in 0..reference_cell::face_count(neighbour_type) {
                let local_nodes = reference_cell::face_nodes(neighbour_type, neighbour_face);
                if local_nodes.len() != face_nodes.len() {
                    continue;
                }
                neighbour_face_nodes.clear();
                neighbour_face_nodes.extend(local_nodes.iter().map(|&local| neighbour_row[local]));
                neighbour_face_nodes.sort_unstable();
                if neighbour_face_nodes == face_nodes {
                    face_face_connectivity[index] = neighbour_face;
                    break;
                }
            }
        }
    }
    face_face_connectivity
}

/// Face-to-element connectivity of one element set
///
/// Answers, for each (element, local face) pair of the own element set,
/// whether a neighbouring element shares that face, which element that is,
/// and which of the neighbour's local faces matches. A face without a
/// neighbour is either a true mesh boundary or, if the own set was not part
/// of the searched universe, unresolved.
#[derive(Debug)]
pub struct FaceConnectivity<'a, T: RealScalar> {
    own_elements: &'a Entities<T>,
    element_nb_faces: usize,
    face_has_neighbour: Vec<bool>,
    face_element_connectivity: Vec<ElementRef>,
    face_face_connectivity: Vec<usize>,
}

impl<'a, T: RealScalar> FaceConnectivity<'a, T> {
    /// Create face connectivity for one element set, searched against the
    /// universe a node connectivity was built over
    pub fn new(
        own_elements: &'a Entities<T>,
        node_connectivity: &NodeConnectivity<'_, T>,
    ) -> Result<Self> {
        let (face_has_neighbour, face_element_connectivity, face_face_connectivity) =
            build_face_element_adjacency(own_elements, node_connectivity)?;
        Ok(Self {
            own_elements,
            element_nb_faces: reference_cell::face_count(own_elements.cell_type()),
            face_has_neighbour,
            face_element_connectivity,
            face_face_connectivity,
        })
    }
    /// The element set this connectivity describes
    pub fn own_elements(&self) -> &'a Entities<T> {
        self.own_elements
    }
    /// Number of local faces per element
    pub fn element_nb_faces(&self) -> usize {
        self.element_nb_faces
    }
    /// Whether a neighbouring element shares this face
    pub fn has_adjacent_element(&self, element: usize, face: usize) -> bool {
        self.face_has_neighbour[element * self.element_nb_faces + face]
    }
    /// The neighbouring element sharing this face
    pub fn adjacent_element(&self, element: usize, face: usize) -> Result<ElementRef> {
        let index = element * self.element_nb_faces + face;
        if !self.face_has_neighbour[index] {
            return Err(ConnectivityError::NoAdjacentElement { element, face });
        }
        Ok(self.face_element_connectivity[index])
    }
    /// The local face index on the neighbour that matches this face
    pub fn adjacent_face(&self, element: usize, face: usize) -> Result<usize> {
        let index = element * self.element_nb_faces + face;
        if !self.face_has_neighbour[index] {
            return Err(ConnectivityError::NoAdjacentElement { element, face });
        }
        Ok(self.face_face_connectivity[index])
    }
    /// Recompute the matching local face indices from the element adjacency
    /// alone
    pub fn rebuild_adjacent_faces(&mut self, node_connectivity: &NodeConnectivity<'_, T>) {
        self.face_face_connectivity = build_face_face_adjacency(
            self.own_elements,
            node_connectivity.entities(),
            &self.face_has_neighbour,
            &self.face_element_connectivity,
        );
    }
    /// Snapshot of the adjacency arrays, detached from the element sets
    #[cfg(feature = "serde")]
    pub fn to_data(&self) -> FaceConnectivityData {
        FaceConnectivityData {
            element_nb_faces: self.element_nb_faces,
            face_has_neighbour: self.face_has_neighbour.clone(),
            face_element_connectivity: self.face_element_connectivity.clone(),
            face_face_connectivity: self.face_face_connectivity.clone(),
        }
    }
}

/// Owned face adjacency tables, as serialized to disk
#[cfg(feature = "serde")]
#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FaceConnectivityData {
    /// Number of local faces per element.
    pub element_nb_faces: usize,
    /// Whether each global face has a neighbour.
    pub face_has_neighbour: Vec<bool>,
    /// The neighbouring element per global face, where one exists.
    pub face_element_connectivity: Vec<ElementRef>,
    /// The neighbour's matching local face per global face, where one exists.
    pub face_face_connectivity: Vec<usize>,
}
