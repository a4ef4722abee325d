use waveobj::{decode_str, WaveObj};

fn round_trip(obj: &WaveObj) -> WaveObj {
    decode_str(&obj.export_to_string()).expect("exported OBJ must decode")
}

#[test]
fn round_trip_is_idempotent() {
    let source = "\
mtllib scene.mtl
o teapot
v 0.125 -3.5 1
v 1 1 1 0.5
v -0.0001 0 2.75
vn 0 0 1
vn 0.577 0.577 0.577
vt 0.5
vt 0.25 0.75
s 1
f 1/1/1 2/2/2 3/1/1
usemtl porcelain
f 1//2 2//1 3//2
f 3 2 1
";
    let obj = decode_str(source).unwrap();
    let again = round_trip(&obj);

    assert_eq!(again.vertices, obj.vertices);
    assert_eq!(again.normals, obj.normals);
    assert_eq!(again.texcoords, obj.texcoords);
    assert_eq!(again.faces, obj.faces);
    assert_eq!(again.name, obj.name);
    assert_eq!(again.smooth_shading, obj.smooth_shading);
    assert_eq!(again.mtl_libs, obj.mtl_libs);
}

#[test]
fn round_trip_normalizes_relative_indices() {
    let obj = decode_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1").unwrap();
    let text = obj.export_to_string();

    // only positive absolute indices survive an export
    assert!(text.lines().any(|l| l == "f 1 2 3"));
    assert_eq!(round_trip(&obj).faces, obj.faces);
}

#[test]
fn round_trip_preserves_field_absence() {
    let obj = decode_str("v 0 0 0\nv 0 0 1\nvn 0 0 1\nvn 0 1 0\nf 1//2 2//1").unwrap();
    let again = round_trip(&obj);

    let fv = again.faces[0].vertices[0];
    assert_eq!(fv.texcoord, None);
    assert_eq!(fv.normal, Some(2));
    assert_eq!(again.faces, obj.faces);
}

#[test]
fn round_trip_preserves_texcoord_defaults() {
    let obj = decode_str("vt 0.5").unwrap();
    let again = round_trip(&obj);

    assert_eq!(again.texcoords[0].u, 0.5);
    assert_eq!(again.texcoords[0].v, 0.0);
    assert_eq!(again.texcoords[0].w, 0.0);
}

#[test]
fn round_trip_preserves_material_runs() {
    // materials only ever change between faces, never reset, so the
    // usemtl-on-change emission reproduces the exact per-face assignment
    let source = "v 0 0 0\nf 1\nusemtl steel\nf 1\nf 1\nusemtl wood\nf 1\nusemtl steel\nf 1";
    let obj = decode_str(source).unwrap();
    let again = round_trip(&obj);

    let materials: Vec<Option<&str>> = again.faces.iter().map(|f| f.material.as_deref()).collect();
    assert_eq!(
        materials,
        vec![None, Some("steel"), Some("steel"), Some("wood"), Some("steel")]
    );
    assert_eq!(again.faces, obj.faces);
}

#[test]
fn round_trip_preserves_order_with_interleaved_tags() {
    let source = "v 1 0 0\nvn 0 0 1\nv 2 0 0\nvt 0.1 0.2\nv 3 0 0\nf 1/1/1 2/1/1 3/1/1";
    let obj = decode_str(source).unwrap();
    let again = round_trip(&obj);

    let xs: Vec<f32> = again.vertices.iter().map(|v| v.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(again.faces, obj.faces);
}
