//! Systems that run merges against the ECS world.

use bevy::prelude::*;

use super::components::{
    ActiveObject, MergedPuppet, PuppetMaterials, PuppetPlane, PuppetVertexGroups, Selected,
};
use super::messages::{MergePuppet, PuppetMergeFailed, PuppetMerged};
use super::source::EntityPlane;
use crate::merge::{MergeError, MergeOptions, PuppetMerger};
use crate::mesh::PuppetMeshBuilder;

/// System set for puppet merge systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuppetMergeSystems;

type PlaneItem = (
    Entity,
    Option<&'static Name>,
    &'static Mesh3d,
    &'static GlobalTransform,
    Option<&'static MeshMaterial3d<StandardMaterial>>,
);

/// Merges the selected puppet planes when a [`MergePuppet`] request arrives.
///
/// Planes are read in entity order. On success the merged mesh is spawned as
/// a new entity that becomes the only [`Selected`] and [`ActiveObject`]
/// entity. On failure nothing is spawned and the selection is left alone.
///
/// Only the last request of a frame runs; each earlier one is answered with
/// [`MergeError::Superseded`].
#[allow(clippy::too_many_arguments)]
pub fn merge_selected_planes(
    mut commands: Commands,
    mut requests: MessageReader<MergePuppet>,
    default_options: Res<MergeOptions>,
    planes: Query<PlaneItem, (With<PuppetPlane>, With<Selected>)>,
    selected: Query<Entity, With<Selected>>,
    active: Query<Entity, With<ActiveObject>>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<Assets<StandardMaterial>>,
    mut merged: MessageWriter<PuppetMerged>,
    mut failed: MessageWriter<PuppetMergeFailed>,
) {
    let requests: Vec<&MergePuppet> = requests.read().collect();
    let Some((request, superseded)) = requests.split_last() else {
        return;
    };
    for _ in superseded {
        debug!("Merge request superseded by a later request this frame");
        failed.write(PuppetMergeFailed {
            error: MergeError::Superseded,
        });
    }
    let options = request
        .options
        .clone()
        .unwrap_or_else(|| default_options.clone());

    let mut rows: Vec<_> = planes.iter().collect();
    rows.sort_by_key(|(entity, ..)| *entity);

    let outcome = {
        let meshes = &*meshes;
        rows.iter()
            .map(|(entity, name, mesh, transform, material)| -> Result<_, MergeError> {
                let name = name
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_else(|| format!("{entity}"));
                let mesh = meshes
                    .get(&mesh.0)
                    .ok_or_else(|| MergeError::MeshNotLoaded { name: name.clone() })?;
                if mesh
                    .attribute(Mesh::ATTRIBUTE_POSITION)
                    .and_then(|positions| positions.as_float3())
                    .is_none()
                {
                    return Err(MergeError::MissingPositions { name });
                }

                let plane = EntityPlane::new(name, transform.translation(), mesh);
                Ok(match material {
                    Some(material) => plane.with_material(&material.0, materials.get(&material.0)),
                    None => plane,
                })
            })
            .collect::<Result<Vec<_>, MergeError>>()
            .and_then(|sources| PuppetMerger::new(options).merge_sources(&sources))
    };

    let mut result = match outcome {
        Ok(result) => result,
        Err(error) => {
            error!("Puppet merge failed: {}", error);
            failed.write(PuppetMergeFailed { error });
            return;
        }
    };

    let Some(mesh) = PuppetMeshBuilder::from_result(&result).build() else {
        warn!("Puppet merge produced an empty mesh, nothing spawned");
        return;
    };

    for entity in &selected {
        commands.entity(entity).remove::<Selected>();
    }
    for entity in &active {
        commands.entity(entity).remove::<ActiveObject>();
    }

    let mut puppet = commands.spawn((
        Name::new(result.name.clone()),
        Mesh3d(meshes.add(mesh)),
        Transform::default(),
        MergedPuppet {
            axis: result.axis,
            plane_names: result.plane_names.clone(),
        },
        Selected,
        ActiveObject,
    ));

    if let Some(groups) = result.vertex_groups.take() {
        puppet.insert(PuppetVertexGroups(groups));
    }
    if let Some(assignment) = result.material_assignment.take() {
        if let Some(first) = assignment.materials.first() {
            puppet.insert(MeshMaterial3d(first.handle.clone()));
        }
        puppet.insert(PuppetMaterials(assignment));
    }
    let entity = puppet.id();

    for warning in &result.warnings {
        warn!("{}", warning);
    }
    info!(
        "Merged {} planes into '{}' ({})",
        result.plane_count(),
        result.name,
        entity
    );

    merged.write(PuppetMerged {
        entity,
        plane_count: result.plane_count(),
        warnings: result.warnings,
    });
}
