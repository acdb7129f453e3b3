// 256 unit-length gradient directions for lattice gradient noise.
// Golden-spiral points on the unit sphere, shuffled once with a fixed seed.
pub(crate) const VECTORS: [[f64; 3]; 256] = [
    [0.94997901, -0.24052396, 0.19921875],
    [0.86462114, -0.34706919, 0.36328125],
    [0.67682645, 0.1402637, -0.72265625],
    [-0.0612989, -0.47303937, 0.87890625],
    [0.1515152, 0.01852876, -0.98828125],
    [-0.90536826, 0.21985233, -0.36328125],
    [0.60834834, 0.74363482, 0.27734375],
    [0.32240043, -0.82015488, -0.47265625],
    [-0.63941646, 0.52831772, 0.55859375],
    [-0.34945773, 0.14425107, 0.92578125],
    [0.705153, -0.38153146, -0.59765625],
    [-0.57062193, -0.18204396, 0.80078125],
    [-0.61025727, -0.24333398, -0.75390625],
    [0.71772384, 0.19669835, 0.66796875],
    [-0.21291223, -0.59195023, 0.77734375],
    [0.56623036, -0.00682896, -0.82421875],
    [-0.12176718, 0.47578192, -0.87109375],
    [-0.5739594, 0.7834492, -0.23828125],
    [-0.74336222, 0.65476758, -0.13671875],
    [0.67735108, -0.71801497, 0.16015625],
    [0.05850296, 0.58545158, -0.80859375],
    [0.8733213, -0.14570586, 0.46484375],
    [-0.23990064, -0.96732547, -0.08203125],
    [0.69572083, -0.66582688, -0.26953125],
    [0.65570144, 0.61254889, 0.44140625],
    [0.06753431, 0.99126509, -0.11328125],
    [-0.5986254, 0.11334987, -0.79296875],
    [0.36707046, -0.36528413, 0.85546875],
    [0.92232765, 0.30419361, 0.23828125],
    [-0.37292084, -0.21611525, 0.90234375],
    [-0.34556187, -0.19473153, -0.91796875],
    [-0.99814203, -0.06080478, 0.00390625],
    [-0.71872015, -0.68467339, -0.12109375],
    [0.20014484, 0.97844944, 0.05078125],
    [0.12674566, -0.56339717, 0.81640625],
    [-0.62732262, -0.42533982, -0.65234375],
    [0.47624124, 0.69164964, 0.54296875],
    [0.68061432, -0.05638751, 0.73046875],
    [-0.54781764, -0.72915546, 0.41015625],
    [0.7429709, -0.22906587, 0.62890625],
    [-0.11255489, 0.1031095, 0.98828125],
    [-0.5996317, -0.74774845, -0.28515625],
    [-0.51098894, -0.08404473, -0.85546875],
    [0.33659004, 0.12292214, 0.93359375],
    [0.27405662, 0.93740873, -0.21484375],
    [-0.30006477, -0.8883109, -0.34765625],
    [-0.92319958, 0.19354012, 0.33203125],
    [-0.4693848, 0.50739122, 0.72265625],
    [-0.86910007, -0.32703898, 0.37109375],
    [0.292525, 0.51049513, 0.80859375],
    [0.81873389, 0.45090662, -0.35546875],
    [-0.88729302, 0.39949375, 0.23046875],
    [0.57548727, -0.43677432, 0.69140625],
    [-0.40904843, -0.56716646, -0.71484375],
    [0.64882992, 0.46089839, 0.60546875],
    [0.08830199, 0.0, 0.99609375],
    [-0.08241631, 0.70236341, -0.70703125],
    [-0.6576486, -0.73933012, 0.14453125],
    [-0.14782623, 0.98894392, -0.01171875],
    [0.32156689, 0.92219136, 0.21484375],
    [-0.28748352, 0.57024107, -0.76953125],
    [0.43613788, 0.15334148, -0.88671875],
    [0.45548811, 0.83211638, -0.31640625],
    [-0.95309329, -0.13771739, 0.26953125],
    [-0.72215674, -0.02114341, -0.69140625],
    [0.95321785, -0.03010595, 0.30078125],
    [-0.73890664, -0.48022188, 0.47265625],
    [-0.02450668, 0.52997953, 0.84765625],
    [0.79515774, 0.3373465, 0.50390625],
    [0.44800753, 0.67862278, -0.58203125],
    [0.55999051, -0.63247009, -0.53515625],
    [0.35866988, -0.47969293, -0.80078125],
    [0.5410577, -0.46727904, -0.69921875],
    [0.01719445, -0.19592188, 0.98046875],
    [-0.98317384, 0.07180317, 0.16796875],
    [-0.71795437, -0.57878332, -0.38671875],
    [0.52650625, 0.32606876, -0.78515625],
    [-0.43596485, -0.88103801, -0.18359375],
    [0.54977471, 0.07397141, 0.83203125],
    [-0.31370073, -0.72489859, -0.61328125],
    [-0.46099671, -0.7653003, -0.44921875],
    [-0.46988371, 0.57708496, -0.66796875],
    [0.40976412, -0.77050294, 0.48828125],
    [-0.06942109, -0.89072062, 0.44921875],
    [0.18404822, -0.18762407, -0.96484375],
    [0.62032851, -0.77721868, -0.10546875],
    [0.11277758, 0.65622049, 0.74609375],
    [0.80907597, 0.47948128, 0.33984375],
    [-0.53886754, 0.82035688, 0.19140625],
    [0.89989536, 0.16824938, 0.40234375],
    [0.85306882, 0.25178566, -0.45703125],
    [-0.84501921, 0.0886065, -0.52734375],
    [0.36823587, -0.08562372, -0.92578125],
    [-0.23908675, 0.57128556, 0.78515625],
    [0.86384713, -0.3788448, -0.33203125],
    [0.2268367, -0.92375051, -0.30859375],
    [0.60586904, -0.2295806, -0.76171875],
    [-0.96846268, -0.19086648, -0.16015625],
    [0.0222432, -0.91174398, -0.41015625],
    [-0.17779821, 0.87951596, -0.44140625],
    [-0.7377971, 0.24521903, -0.62890625],
    [-0.1057797, -0.96345655, -0.24609375],
    [-0.22493905, -0.420626, -0.87890625],
    [-0.8337934, -0.50518586, -0.22265625],
    [-0.04292495, -0.73585131, -0.67578125],
    [-0.27187325, -0.89734055, 0.34765625],
    [0.55308292, -0.25553834, 0.79296875],
    [-0.20253789, 0.29560297, -0.93359375],
    [0.31755093, -0.94726717, -0.04296875],
    [-0.95632617, 0.2846585, 0.06640625],
    [0.94491519, 0.14596091, -0.29296875],
    [-0.89916417, -0.10106492, -0.42578125],
    [0.98544382, 0.10103696, 0.13671875],
    [0.77707191, -0.6293997, -0.00390625],
    [0.12398287, 0.39527693, 0.91015625],
    [-0.655323, 0.75485368, 0.02734375],
    [0.17796372, -0.39256168, -0.90234375],
    [0.26346686, -0.71065663, 0.65234375],
    [0.51313258, -0.85630703, 0.05859375],
    [0.12892801, -0.80848648, -0.57421875],
    [0.40556872, 0.91265288, -0.05078125],
    [-0.63468367, 0.65976977, -0.40234375],
    [-0.08824853, 0.90416499, 0.41796875],
    [-0.54803734, 0.70055514, 0.45703125],
    [-0.79559759, 0.0991538, 0.59765625],
    [0.24808399, -0.88820208, 0.38671875],
    [0.55158651, -0.7685275, 0.32421875],
    [0.94374805, -0.32392874, -0.06640625],
    [0.88982487, -0.44572969, 0.09765625],
    [0.77239466, 0.61033388, 0.17578125],
    [0.79758693, -0.54346884, 0.26171875],
    [0.89695391, 0.43585005, 0.07421875],
    [0.0536129, -0.95698044, 0.28515625],
    [0.17679403, 0.74385707, -0.64453125],
    [0.56529008, 0.29710062, 0.76953125],
    [0.51736396, -0.77111864, -0.37109375],
    [-0.07186997, 0.05130253, -0.99609375],
    [0.52094766, 0.84603835, 0.11328125],
    [-0.78008687, 0.48560227, 0.39453125],
    [-0.57465808, -0.58313028, 0.57421875],
    [-0.7933258, 0.52930597, -0.30078125],
    [-0.39627458, 0.67617232, 0.62109375],
    [-0.91514966, -0.39883314, -0.05859375],
    [-0.02668644, -0.99945303, 0.01953125],
    [0.18718625, -0.97483209, 0.12109375],
    [-0.35530553, 0.93042253, 0.08984375],
    [0.28946627, 0.59962771, -0.74609375],
    [0.58591847, 0.79592144, -0.15234375],
    [0.4318739, -0.87785135, -0.20703125],
    [-0.06309744, 0.95869659, -0.27734375],
    [-0.86152934, -0.46357875, 0.20703125],
    [-0.26031275, 0.75209366, -0.60546875],
    [-0.26366566, 0.81275316, 0.51953125],
    [-0.41110058, 0.17552822, -0.89453125],
    [0.0034113, -0.69927589, 0.71484375],
    [0.43657936, -0.09598075, 0.89453125],
    [-0.37994231, 0.86031975, -0.33984375],
    [-0.1278233, -0.14947319, -0.98046875],
    [-0.95644812, -0.27218255, 0.10546875],
    [-0.17062524, -0.60549461, -0.77734375],
    [0.74315826, -0.10913076, -0.66015625],
    [0.14130961, 0.18431336, 0.97265625],
    [0.95427927, -0.19035552, -0.23046875],
    [-0.96491451, 0.02105431, -0.26171875],
    [0.52351915, 0.50855411, -0.68359375],
    [0.82305101, 0.04208315, 0.56640625],
    [0.72728742, 0.63763989, -0.25390625],
    [-0.68427518, 0.66778499, 0.29296875],
    [-0.87428914, 0.48413071, -0.03515625],
    [0.28827851, 0.70814897, 0.64453125],
    [-0.82324094, -0.18942582, 0.53515625],
    [0.38512601, -0.89560156, 0.22265625],
    [-0.274063, 0.94551067, -0.17578125],
    [0.71538127, 0.32011278, -0.62109375],
    [-0.39258477, -0.62385647, 0.67578125],
    [0.52340814, -0.61492136, 0.58984375],
    [-0.46482871, 0.32341571, 0.82421875],
    [0.02963441, 0.81262625, 0.58203125],
    [-0.35653912, -0.7816801, 0.51171875],
    [0.31475867, 0.81858217, -0.48046875],
    [0.73924993, -0.41882946, 0.52734375],
    [-0.53326979, -0.4129941, 0.73828125],
    [-0.47366285, -0.84562484, 0.24609375],
    [-0.00792933, 0.23211408, -0.97265625],
    [-0.5589513, -0.82897043, -0.01953125],
    [0.83456237, -0.23957596, -0.49609375],
    [0.991468, 0.01934916, -0.12890625],
    [0.11533198, -0.82664294, 0.55078125],
    [-0.58672008, 0.34953534, -0.73046875],
    [-0.28957161, 0.01547476, -0.95703125],
    [0.04093252, -0.54128274, -0.83984375],
    [-0.47681642, 0.87586396, -0.07421875],
    [0.37527808, -0.67361384, -0.63671875],
    [-0.43048752, -0.3849173, -0.81640625],
    [-0.66826856, 0.34294439, 0.66015625],
    [0.69488341, 0.71902692, 0.01171875],
    [-0.78327051, -0.19639668, -0.58984375],
    [0.99286845, -0.11391345, 0.03515625],
    [-0.26588766, 0.37819784, 0.88671875],
    [0.84193296, -0.51277226, -0.16796875],
    [-0.81845066, 0.28987843, 0.49609375],
    [0.1287407, 0.39375301, -0.91015625],
    [-0.40440458, 0.84267367, 0.35546875],
    [0.4751453, 0.52377835, 0.70703125],
    [-0.15545231, -0.29931397, 0.94140625],
    [0.91520898, 0.35462118, -0.19140625],
    [0.8297528, 0.55085242, -0.08984375],
    [-0.13063344, 0.71807694, 0.68359375],
    [-0.80881048, -0.58649749, 0.04296875],
    [-0.71185706, -0.06597475, 0.69921875],
    [0.97193669, 0.233648, -0.02734375],
    [0.19408896, -0.64596461, -0.73828125],
    [0.32785879, 0.41711809, -0.84765625],
    [-0.22148522, 0.9415285, 0.25390625],
    [0.42256497, -0.27601509, -0.86328125],
    [-0.89544876, -0.30504709, -0.32421875],
    [-0.79572512, 0.59178096, 0.12890625],
    [0.91705115, -0.0579852, -0.39453125],
    [0.16811966, -0.35926196, 0.91796875],
    [-0.62650743, 0.16514535, 0.76171875],
    [0.35532067, -0.55260528, 0.75390625],
    [0.59713679, 0.68463843, -0.41796875],
    [-0.69680553, -0.33022914, 0.63671875],
    [0.41850649, 0.82539831, 0.37890625],
    [-0.36674813, -0.92669665, 0.08203125],
    [-0.1570372, -0.97037758, 0.18359375],
    [-0.98320257, 0.15419455, -0.09765625],
    [-0.08167589, 0.30383024, 0.94921875],
    [0.67312202, -0.60466278, 0.42578125],
    [0.72827941, -0.5306652, -0.43359375],
    [0.82737517, 0.05850941, -0.55859375],
    [0.10572446, -0.98383589, -0.14453125],
    [-0.57414082, -0.60580717, -0.55078125],
    [0.68680143, 0.50832182, -0.51953125],
    [0.37553194, 0.31649872, 0.87109375],
    [-0.04737391, -0.33393111, -0.94140625],
    [-0.40449111, 0.37961947, -0.83203125],
    [-0.90106557, -0.00879161, 0.43359375],
    [-0.72131423, -0.62006103, 0.30859375],
    [0.21940206, 0.84912456, 0.48046875],
    [0.01422315, 0.83963244, -0.54296875],
    [-0.64544046, 0.51243592, -0.56640625],
    [-0.78116566, -0.38905223, -0.48828125],
    [-0.45119292, 0.73654833, -0.50390625],
    [-0.79545944, 0.38879887, -0.46484375],
    [0.24467621, -0.15564298, 0.95703125],
    [0.24299908, 0.19983796, -0.94921875],
    [-0.16583395, -0.77225981, 0.61328125],
    [-0.347795, -0.41677465, 0.83984375],
    [-0.91294032, 0.35616269, -0.19921875],
    [-0.01446355, 0.98822173, 0.15234375],
    [0.13892066, 0.91494869, -0.37890625],
    [-0.25880649, -0.04577922, 0.96484375],
    [-0.50429217, 0.02085406, 0.86328125],
    [-0.16395677, -0.84336356, -0.51171875],
    [0.11272405, 0.94190253, 0.31640625],
];
