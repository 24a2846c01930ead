//! The fixed gradient-vector table used by the gradient-noise hash.
//!
//! 256 pseudo-randomly distributed unit-length 3D vectors. The table contents
//! are part of the output contract: changing any entry changes every
//! gradient-noise value the crate produces.

/// Gradient directions indexed by the low eight bits of the lattice hash.
pub(crate) static RANDOM_VECTORS: [[f64; 3]; 256] = [
    [-0.763874, -0.596439, -0.246489],
    [0.396055, 0.904518, -0.158073],
    [-0.499004, -0.8665, -0.0131631],
    [0.468724, -0.824756, 0.316346],
    [0.832247, 0.433329, 0.345808],
    [-0.454473, 0.629497, -0.630228],
    [-0.162349, -0.869962, -0.465628],
    [0.932805, 0.253451, 0.256198],
    [-0.345419, 0.927299, -0.144227],
    [-0.715026, -0.293698, -0.634413],
    [-0.245997, 0.717467, -0.651711],
    [-0.967409, -0.250435, -0.037451],
    [0.901729, 0.397108, -0.170852],
    [0.892657, -0.0720622, -0.444938],
    [0.0260084, -0.0361701, 0.999007],
    [0.949107, -0.19486, 0.247439],
    [0.471803, -0.807064, -0.355036],
    [0.879737, 0.141845, 0.453809],
    [0.570041, 0.696964, 0.435011],
    [-0.141076, 0.158992, -0.977162],
    [-0.883368, -0.0726098, -0.462951],
    [-0.48396, 0.435216, 0.758852],
    [0.885564, -0.408988, 0.221941],
    [-0.16179, -0.677569, -0.717439],
    [0.803935, -0.302872, 0.511261],
    [0.788955, 0.313007, -0.528869],
    [-0.912891, 0.357967, -0.19453],
    [-0.9444, 0.162846, 0.285734],
    [0.242846, 0.765108, -0.596007],
    [-0.703398, 0.268246, 0.658209],
    [0.0615451, 0.945931, 0.318478],
    [-0.125544, 0.323524, 0.937875],
    [0.593826, 0.133898, -0.793355],
    [-0.841117, 0.408343, -0.355151],
    [-0.795935, -0.567332, 0.21124],
    [-0.445893, -0.332158, -0.831528],
    [-0.0490206, -0.43412, -0.899547],
    [0.633073, 0.716545, 0.292876],
    [0.604316, 0.0676527, 0.793898],
    [0.385319, -0.734582, 0.559081],
    [-0.260226, 0.0949338, 0.960875],
    [0.542395, 0.519211, 0.660259],
    [0.436131, -0.35846, 0.825414],
    [0.10626, 0.980893, -0.163676],
    [-0.260226, 0.960875, 0.0949338],
    [0.559081, 0.734582, -0.385319],
    [0.245997, -0.651711, 0.717467],
    [-0.313007, 0.528869, 0.788955],
    [-0.0949338, -0.260226, 0.960875],
    [0.332158, -0.831528, 0.445893],
    [-0.717467, 0.651711, -0.245997],
    [0.444938, -0.0720622, 0.892657],
    [-0.433329, 0.832247, 0.345808],
    [-0.967409, 0.250435, -0.037451],
    [0.869962, -0.465628, -0.162349],
    [0.293698, -0.634413, -0.715026],
    [-0.471803, 0.355036, 0.807064],
    [0.932805, -0.256198, 0.253451],
    [0.21124, 0.567332, -0.795935],
    [-0.292876, 0.716545, -0.633073],
    [-0.927299, 0.144227, -0.345419],
    [0.9444, -0.285734, 0.162846],
    [0.245997, 0.651711, 0.717467],
    [-0.313007, -0.528869, 0.788955],
    [-0.596439, 0.246489, 0.763874],
    [0.158992, -0.977162, -0.141076],
    [0.357967, 0.912891, -0.19453],
    [-0.313007, -0.788955, 0.528869],
    [0.765108, 0.242846, 0.596007],
    [0.162846, -0.9444, -0.285734],
    [0.945931, 0.318478, -0.0615451],
    [-0.715026, -0.293698, 0.634413],
    [-0.462951, -0.883368, -0.0726098],
    [0.125544, 0.937875, 0.323524],
    [-0.825414, -0.35846, -0.436131],
    [-0.633073, -0.716545, -0.292876],
    [0.511261, -0.803935, -0.302872],
    [0.256198, 0.253451, -0.932805],
    [-0.0361701, 0.999007, -0.0260084],
    [-0.892657, 0.444938, 0.0720622],
    [0.260226, -0.960875, 0.0949338],
    [0.932805, 0.256198, -0.253451],
    [-0.604316, 0.0676527, -0.793898],
    [-0.313007, 0.528869, -0.788955],
    [0.511261, -0.302872, -0.803935],
    [0.163676, 0.980893, -0.10626],
    [-0.945931, -0.0615451, -0.318478],
    [0.658209, -0.268246, -0.703398],
    [0.345808, -0.433329, -0.832247],
    [-0.696964, -0.435011, 0.570041],
    [0.519211, -0.660259, -0.542395],
    [0.0949338, -0.260226, 0.960875],
    [-0.162846, 0.285734, 0.9444],
    [0.717467, -0.651711, 0.245997],
    [0.292876, -0.633073, -0.716545],
    [0.593826, -0.133898, -0.793355],
    [0.824756, -0.468724, -0.316346],
    [-0.869962, 0.465628, -0.162349],
    [0.444938, 0.0720622, -0.892657],
    [0.0726098, 0.462951, -0.883368],
    [-0.677569, -0.16179, 0.717439],
    [0.0260084, -0.999007, -0.0361701],
    [0.355036, -0.471803, -0.807064],
    [0.19486, 0.949107, 0.247439],
    [0.570041, 0.696964, -0.435011],
    [0.313007, -0.788955, -0.528869],
    [0.133898, 0.593826, 0.793355],
    [-0.717439, -0.16179, 0.677569],
    [-0.318478, 0.0615451, 0.945931],
    [0.715026, 0.293698, 0.634413],
    [-0.355036, -0.807064, -0.471803],
    [0.967409, -0.037451, 0.250435],
    [0.318478, -0.945931, -0.0615451],
    [-0.158073, -0.904518, 0.396055],
    [-0.927299, -0.345419, 0.144227],
    [-0.385319, -0.734582, -0.559081],
    [0.795935, 0.21124, -0.567332],
    [0.788955, -0.528869, -0.313007],
    [-0.763874, 0.246489, -0.596439],
    [-0.162846, 0.9444, 0.285734],
    [-0.357967, 0.19453, 0.912891],
    [-0.444938, -0.892657, 0.0720622],
    [-0.901729, -0.397108, 0.170852],
    [0.734582, 0.385319, -0.559081],
    [-0.825414, -0.35846, 0.436131],
    [0.141845, 0.879737, -0.453809],
    [0.960875, -0.0949338, 0.260226],
    [-0.253451, 0.256198, -0.932805],
    [-0.795935, -0.21124, 0.567332],
    [-0.879737, 0.453809, 0.141845],
    [0.763874, -0.596439, -0.246489],
    [0.734582, -0.559081, 0.385319],
    [0.8665, -0.0131631, -0.499004],
    [0.268246, -0.658209, 0.703398],
    [0.0949338, 0.260226, 0.960875],
    [-0.037451, 0.967409, -0.250435],
    [-0.0131631, 0.8665, 0.499004],
    [-0.435216, 0.758852, -0.48396],
    [-0.0949338, 0.960875, -0.260226],
    [0.977162, -0.141076, -0.158992],
    [-0.793898, 0.604316, 0.0676527],
    [0.471803, 0.355036, 0.807064],
    [0.385319, -0.559081, -0.734582],
    [-0.825414, -0.436131, 0.35846],
    [0.904518, 0.396055, 0.158073],
    [-0.133898, 0.793355, -0.593826],
    [-0.48396, -0.435216, 0.758852],
    [0.0949338, 0.960875, 0.260226],
    [-0.221941, 0.408988, 0.885564],
    [0.435216, -0.758852, 0.48396],
    [0.793355, -0.133898, -0.593826],
    [-0.824756, 0.468724, -0.316346],
    [-0.221941, -0.408988, -0.885564],
    [-0.292876, 0.716545, 0.633073],
    [0.765108, -0.596007, 0.242846],
    [-0.453809, -0.879737, 0.141845],
    [-0.0726098, -0.462951, 0.883368],
    [-0.158992, 0.141076, -0.977162],
    [0.436131, 0.35846, 0.825414],
    [0.634413, 0.715026, 0.293698],
    [0.345419, 0.927299, -0.144227],
    [0.831528, -0.332158, 0.445893],
    [0.35846, -0.436131, -0.825414],
    [0.841117, -0.408343, -0.355151],
    [-0.246489, 0.596439, 0.763874],
    [0.977162, -0.141076, 0.158992],
    [-0.885564, 0.408988, 0.221941],
    [0.715026, -0.293698, 0.634413],
    [-0.345419, -0.144227, -0.927299],
    [-0.158992, -0.141076, -0.977162],
    [-0.162349, -0.465628, -0.869962],
    [0.408343, 0.841117, -0.355151],
    [-0.246489, 0.596439, -0.763874],
    [-0.570041, -0.696964, 0.435011],
    [0.260226, 0.0949338, 0.960875],
    [-0.831528, -0.332158, 0.445893],
    [0.0260084, -0.0361701, -0.999007],
    [0.528869, 0.313007, -0.788955],
    [-0.596439, -0.763874, 0.246489],
    [0.677569, 0.717439, 0.16179],
    [0.0361701, 0.0260084, 0.999007],
    [-0.355151, -0.841117, 0.408343],
    [-0.323524, 0.125544, -0.937875],
    [-0.703398, 0.658209, 0.268246],
    [-0.765108, 0.242846, -0.596007],
    [0.824756, 0.316346, -0.468724],
    [-0.19453, -0.912891, -0.357967],
    [0.268246, -0.703398, -0.658209],
    [0.883368, -0.0726098, -0.462951],
    [0.937875, -0.125544, 0.323524],
    [0.716545, -0.633073, 0.292876],
    [-0.345808, 0.433329, 0.832247],
    [0.125544, -0.323524, -0.937875],
    [-0.8665, 0.0131631, -0.499004],
    [0.435216, 0.758852, 0.48396],
    [0.246489, 0.763874, -0.596439],
    [-0.932805, -0.256198, 0.253451],
    [0.945931, 0.318478, 0.0615451],
    [0.444938, -0.892657, 0.0720622],
    [-0.471803, -0.355036, 0.807064],
    [-0.316346, 0.824756, 0.468724],
    [0.19453, -0.912891, -0.357967],
    [0.633073, 0.716545, -0.292876],
    [-0.133898, 0.593826, 0.793355],
    [-0.285734, 0.162846, 0.9444],
    [0.912891, -0.357967, -0.19453],
    [-0.716545, -0.292876, 0.633073],
    [-0.285734, -0.9444, 0.162846],
    [-0.542395, -0.660259, -0.519211],
    [-0.345808, -0.832247, 0.433329],
    [0.10626, 0.163676, 0.980893],
    [0.912891, 0.357967, -0.19453],
    [0.758852, 0.48396, -0.435216],
    [-0.763874, -0.596439, 0.246489],
    [0.937875, -0.323524, 0.125544],
    [0.528869, 0.313007, 0.788955],
    [-0.260226, 0.960875, -0.0949338],
    [0.16179, 0.677569, -0.717439],
    [0.444938, 0.0720622, 0.892657],
    [-0.807064, -0.355036, -0.471803],
    [0.734582, -0.385319, -0.559081],
    [-0.567332, -0.21124, -0.795935],
    [-0.892657, -0.0720622, 0.444938],
    [-0.144227, -0.345419, 0.927299],
    [0.980893, 0.163676, 0.10626],
    [0.435011, 0.570041, 0.696964],
    [0.435216, 0.758852, -0.48396],
    [0.433329, 0.345808, 0.832247],
    [-0.158073, -0.904518, -0.396055],
    [0.0726098, 0.883368, 0.462951],
    [-0.316346, -0.824756, -0.468724],
    [0.945931, -0.0615451, -0.318478],
    [0.716545, 0.292876, -0.633073],
    [0.125544, 0.323524, 0.937875],
    [0.567332, 0.795935, 0.21124],
    [0.660259, -0.542395, -0.519211],
    [-0.397108, -0.170852, -0.901729],
    [0.977162, 0.141076, 0.158992],
    [0.716545, -0.633073, -0.292876],
    [-0.763874, 0.596439, -0.246489],
    [-0.163676, -0.10626, -0.980893],
    [-0.0676527, 0.793898, 0.604316],
    [0.242846, 0.596007, -0.765108],
    [-0.999007, 0.0260084, 0.0361701],
    [0.0720622, -0.444938, 0.892657],
    [-0.596007, 0.765108, -0.242846],
    [-0.980893, 0.10626, -0.163676],
    [0.793898, -0.604316, -0.0676527],
    [0.0720622, -0.892657, -0.444938],
    [-0.967409, -0.250435, 0.037451],
    [-0.465628, -0.869962, -0.162349],
    [-0.630228, 0.629497, -0.454473],
    [-0.832247, -0.433329, 0.345808],
    [-0.932805, -0.256198, -0.253451],
    [0.35846, 0.436131, -0.825414],
    [-0.716545, -0.292876, -0.633073],
];

#[cfg(test)]
mod tests {
    use super::RANDOM_VECTORS;

    #[test]
    fn vectors_are_unit_length() {
        for (i, [x, y, z]) in RANDOM_VECTORS.iter().enumerate() {
            let len = (x * x + y * y + z * z).sqrt();
            assert!(
                (len - 1.0).abs() < 1e-3,
                "entry {i} has length {len}, expected ~1.0"
            );
        }
    }
}
