//! Pairwise circle-circle collision detection and response.
//!
//! Every unordered pair `(i, j)` with `i < j` is visited in nested-loop
//! order, so the result only depends on body order and state. Boxes are
//! skipped: only circles collide.

use serde::Deserialize;

use crate::simulation::states::{Body, NVec2, EPSILON};

/// How overlapping circles are resolved
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Exchange momentum along the line of centres, then separate
    #[serde(rename = "elastic")]
    #[default]
    Elastic,
    /// Only push the pair apart, velocities untouched
    #[serde(rename = "positional")]
    PositionalOnly,
}

/// How the overlap is shared between two dynamic bodies
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separation {
    /// Each body moves half of the overlap regardless of mass
    #[serde(rename = "halves")]
    #[default]
    Halves,
    /// Lighter bodies move further, in proportion to inverse mass
    #[serde(rename = "mass_weighted")]
    MassWeighted,
}

/// Overlap data for one colliding pair
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// `pos_i - pos_j`
    pub offset: NVec2,
    /// Unit vector from `j` toward `i`
    pub normal: NVec2,
    /// Sum of radii minus centre distance, positive when overlapping
    pub depth: f64,
    pub distance_sq: f64,
}

/// Overlap test on squared distances; `None` when apart, when either body
/// is not a circle, or when the centres coincide.
pub fn circle_contact(bi: &Body, bj: &Body) -> Option<Contact> {
    let (ri, rj) = (bi.radius()?, bj.radius()?);

    let n = bi.position - bj.position;
    let distance_sq = n.norm_squared();
    let reach = ri + rj;
    if distance_sq >= reach * reach {
        return None;
    }

    let distance = distance_sq.sqrt();
    if distance < EPSILON {
        tracing::trace!("coincident centres, pair skipped");
        return None;
    }

    Some(Contact {
        offset: n,
        normal: n / distance,
        depth: reach - distance,
        distance_sq,
    })
}

/// Resolve every overlapping pair once. Returns the number of contacts handled.
pub fn resolve_collisions(bodies: &mut [Body], mode: CollisionMode, separation: Separation) -> usize {
    let n = bodies.len();
    let mut contacts = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            // split so both bodies of the pair can be borrowed mutably
            let (head, tail) = bodies.split_at_mut(j);
            let bi = &mut head[i];
            let bj = &mut tail[0];

            if bi.is_static && bj.is_static {
                continue;
            }

            let Some(contact) = circle_contact(bi, bj) else {
                continue;
            };

            if mode == CollisionMode::Elastic {
                exchange_momentum(bi, bj, &contact);
            }
            separate(bi, bj, &contact, separation);
            contacts += 1;
        }
    }

    contacts
}

/// 1-D elastic collision along the line of centres.
///
/// v_i -= 2 w_i / (w_i + w_j) * (n . dv) / |n|^2 * n, and symmetrically for j.
/// With w = 1/m this is the usual 2 m_j / (m_i + m_j) factor; a static
/// partner (w = 0) reflects the dynamic body's normal velocity.
fn exchange_momentum(bi: &mut Body, bj: &mut Body, contact: &Contact) {
    let (wi, wj) = (bi.inverse_mass(), bj.inverse_mass());
    let w_sum = wi + wj;
    if w_sum <= 0.0 {
        return;
    }

    let n = contact.offset;
    let dv = bi.velocity - bj.velocity;
    let approach = n.dot(&dv);
    // already separating
    if approach >= 0.0 {
        return;
    }

    let impulse = (2.0 * approach / (w_sum * contact.distance_sq)) * n;
    bi.velocity -= wi * impulse;
    bj.velocity += wj * impulse;
}

/// Push the pair apart along the normal until the circles just touch
fn separate(bi: &mut Body, bj: &mut Body, contact: &Contact, separation: Separation) {
    let (wi, wj) = (bi.inverse_mass(), bj.inverse_mass());

    let (share_i, share_j) = if wi == 0.0 {
        (0.0, 1.0)
    } else if wj == 0.0 {
        (1.0, 0.0)
    } else {
        match separation {
            Separation::Halves => (0.5, 0.5),
            Separation::MassWeighted => (wi / (wi + wj), wj / (wi + wj)),
        }
    };

    let push = contact.normal * contact.depth;
    bi.position += share_i * push;
    bj.position -= share_j * push;
}
