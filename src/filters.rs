//! Static coefficient tables behind the wavelet name registry.
//!
//! Orthogonal families store the reconstruction low-pass filter only (its
//! coefficients sum to `sqrt(2)`); the other three filters of the bank are
//! derived by quadrature mirror relations in [`crate::wavelet`]. The
//! biorthogonal families store a zero-padded primal low-pass `h` together
//! with the dual low-pass `hm`, and the registry records the length of the
//! live center segment of `h`.

#![allow(clippy::excessive_precision)]

/// Resolved registry entry, ready for bank construction.
pub(crate) enum FilterSpec {
    /// Reconstruction low-pass of an orthogonal bank.
    Orthogonal(&'static [f64]),
    /// Primal `h` (zero padded), dual `hm`, live segment length of `h`,
    /// and whether the primal and dual roles are swapped (`rbior*`).
    Biorthogonal {
        h: &'static [f64],
        hm: &'static [f64],
        len: usize,
        reverse: bool,
    },
}

pub(crate) fn lookup(name: &str) -> Option<FilterSpec> {
    if let Some(c) = orthogonal_table(name) {
        return Some(FilterSpec::Orthogonal(c));
    }
    let (order, reverse) = match name.strip_prefix("rbior") {
        Some(rest) => (rest, true),
        None => (name.strip_prefix("bior")?, false),
    };
    let (h, hm, len): (&'static [f64], &'static [f64], usize) = match order {
        "1.1" => (&BIOR_H1, &BIOR_HM111, 2),
        "1.3" => (&BIOR_H1, &BIOR_HM113, 6),
        "1.5" => (&BIOR_H1, &BIOR_HM115, 10),
        "2.2" => (&BIOR_H2, &BIOR_HM222, 6),
        "2.4" => (&BIOR_H2, &BIOR_HM224, 10),
        "2.6" => (&BIOR_H2, &BIOR_HM226, 14),
        "2.8" => (&BIOR_H2, &BIOR_HM228, 18),
        "3.1" => (&BIOR_H3, &BIOR_HM331, 4),
        "3.3" => (&BIOR_H3, &BIOR_HM333, 8),
        "3.5" => (&BIOR_H3, &BIOR_HM335, 12),
        "3.7" => (&BIOR_H3, &BIOR_HM337, 16),
        "3.9" => (&BIOR_H3, &BIOR_HM339, 20),
        "4.4" => (&BIOR_H4, &BIOR_HM444, 10),
        "5.5" => (&BIOR_H5, &BIOR_HM555, 12),
        "6.8" => (&BIOR_H6, &BIOR_HM668, 18),
        _ => return None,
    };
    Some(FilterSpec::Biorthogonal {
        h,
        hm,
        len,
        reverse,
    })
}

fn orthogonal_table(name: &str) -> Option<&'static [f64]> {
    if name == "haar" {
        return Some(&DB1);
    }
    if name == "meyer" {
        return Some(&MEYER);
    }
    let (family, rest, first): (&[&'static [f64]], &str, usize) =
        if let Some(r) = name.strip_prefix("db") {
            (&DB, r, 1)
        } else if let Some(r) = name.strip_prefix("sym") {
            (&SYM, r, 2)
        } else if let Some(r) = name.strip_prefix("coif") {
            (&COIF, r, 1)
        } else {
            return None;
        };
    let order: usize = rest.parse().ok()?;
    family.get(order.checked_sub(first)?).copied()
}

static DB: [&[f64]; 38] = [
    &DB1, &DB2, &DB3, &DB4, &DB5, &DB6, &DB7, &DB8, &DB9, &DB10, &DB11, &DB12, &DB13, &DB14,
    &DB15, &DB16, &DB17, &DB18, &DB19, &DB20, &DB21, &DB22, &DB23, &DB24, &DB25, &DB26, &DB27,
    &DB28, &DB29, &DB30, &DB31, &DB32, &DB33, &DB34, &DB35, &DB36, &DB37, &DB38,
];

static SYM: [&[f64]; 19] = [
    &SYM2, &SYM3, &SYM4, &SYM5, &SYM6, &SYM7, &SYM8, &SYM9, &SYM10, &SYM11, &SYM12, &SYM13,
    &SYM14, &SYM15, &SYM16, &SYM17, &SYM18, &SYM19, &SYM20,
];

static COIF: [&[f64]; 17] = [
    &COIF1, &COIF2, &COIF3, &COIF4, &COIF5, &COIF6, &COIF7, &COIF8, &COIF9, &COIF10, &COIF11,
    &COIF12, &COIF13, &COIF14, &COIF15, &COIF16, &COIF17,
];

pub(crate) const DB1: [f64; 2] = [
    0.7071067811865476, 0.7071067811865476,
];

pub(crate) const DB2: [f64; 4] = [
    -0.1294095225512604, 0.2241438680420134, 0.8365163037378079,
    0.4829629131445341,
];

pub(crate) const DB3: [f64; 6] = [
    0.0352262918857095, -0.0854412738820267, -0.1350110200102546,
    0.4598775021184915, 0.8068915093110925, 0.3326705529500826,
];

pub(crate) const DB4: [f64; 8] = [
    -0.010597401785069, 0.0328830116668852, 0.0308413818355607,
    -0.187034811719093, -0.0279837694168599, 0.6308807679298589,
    0.7148465705529156, 0.2303778133088965,
];

pub(crate) const DB5: [f64; 10] = [
    0.0033357252854737765, -0.01258075199908201, -0.0062414902127982865,
    0.07757149384004577, -0.03224486958463836, -0.24229488706638225,
    0.13842814590132027, 0.7243085284377733, 0.6038292697971899,
    0.16010239797419298,
];

pub(crate) const DB6: [f64; 12] = [
    -0.0010773010853085, 0.0047772575109455, 0.0005538422011614,
    -0.0315820393174862, 0.0275228655303053, 0.0975016055873225,
    -0.1297668675672625, -0.22626469396544, 0.3152503517091982,
    0.7511339080210959, 0.4946238903984533, 0.1115407433501095,
];

pub(crate) const DB7: [f64; 14] = [
    0.0003537137999745193, -0.0018016407040474887, 0.00042957797292137226,
    0.012550998556099802, -0.016574541630666823, -0.03802993693501439,
    0.08061260915108302, 0.07130921926683005, -0.22403618499387473,
    -0.14390600392856412, 0.46978228740519273, 0.729132090846235,
    0.3965393194819171, 0.07785205408500911,
];

pub(crate) const DB8: [f64; 16] = [
    -0.0001174767841248, 0.0006754494064506, -0.000391740373377,
    -0.0048703529934518, 0.0087460940474061, 0.0139810279173995,
    -0.0440882539307952, -0.0173693010018083, 0.1287474266204837,
    0.0004724845739124, -0.2840155429615702, -0.0158291052563816,
    0.5853546836541907, 0.6756307362972904, 0.3128715909143031,
    0.0544158422431049,
];

pub(crate) const DB9: [f64; 18] = [
    3.934732031627162e-05, -0.00025196318894271034, 0.0002303857635231965,
    0.0018476468830562257, -0.004281503682463428, -0.004723204757751398,
    0.02236166212367908, 0.0002509471148315352, -0.06763282906133018,
    0.030725681479333813, 0.14854074933810563, -0.09684078322297546,
    -0.2932737832791756, 0.13319738582500737, 0.6572880780513009,
    0.6048231236901114, 0.24383467461259037, 0.03807794736387836,
];

pub(crate) const DB10: [f64; 20] = [
    -1.3264202894521273e-05, 9.358867032006977e-05, -0.00011646685512928564,
    -0.0006858566949597125, 0.0019924052951850553, 0.001395351747052918,
    -0.010733175483330614, 0.0036065535669561975, 0.033212674059340974,
    -0.029457536821875456, -0.07139414716639839, 0.09305736460357454,
    0.1273693403357912, -0.19594627437737602, -0.24984642432731555,
    0.28117234366057614, 0.6884590394536045, 0.5272011889317259,
    0.18817680007769172, 0.026670057900555582,
];

pub(crate) const DB11: [f64; 22] = [
    4.49427427723651e-06, -3.4634984186984996e-05, 5.4439074699368475e-05,
    0.0002491525235528235, -0.0008930232506662646, -0.0003085928588151432,
    0.004928417656059041, -0.0033408588730144454, -0.0153648209062016,
    0.020840904360181062, 0.031335090219046076, -0.0664387856950252,
    -0.046479955116684187, 0.14981201246637849, 0.0660435881966832,
    -0.27423084681794696, -0.16227524502749036, 0.41196436894790744,
    0.6856867749162006, 0.44989976435604534, 0.1440670211506245,
    0.018694297761471083,
];

pub(crate) const DB12: [f64; 24] = [
    -1.529071758068511e-06, 1.2776952219379767e-05, -2.4241545757030785e-05,
    -8.850410920820432e-05, 0.00038865306282093143, 6.545128212509596e-06,
    -0.0021795036186277603, 0.0022486072409952378, 0.00671149900879551,
    -0.012840825198300683, -0.01221864906974828, 0.04154627749508444,
    0.010849130255822185, -0.09643212009650708, 0.00535956967435215,
    0.18247860592757967, -0.023779257256069726, -0.3161784537527855,
    -0.04476388565377463, 0.5158864784278157, 0.6571987225793071,
    0.37735513521421266, 0.10956627282118515, 0.013112257957229518,
];

pub(crate) const DB13: [f64; 26] = [
    5.220035098454864e-07, -4.700416479360868e-06, 1.0441930571408138e-05,
    3.0678537579325496e-05, -0.0001651289885565055, 4.9251525126289464e-05,
    0.0009323261308672633, -0.001315673911892299, -0.0027619112346568622,
    0.007255589401617566, 0.003923941448797416, -0.02383142071032365,
    0.0023799722540590786, 0.05613947710028343, -0.026488406475343694,
    -0.10580761818793433, 0.07294893365677717, 0.17947607942933985,
    -0.12457673075081525, -0.31497290771138864, 0.08698572617964724,
    0.5888895704312189, 0.6110558511587877, 0.31199632216043804,
    0.08286124387290278, 0.009202133538962367,
];

pub(crate) const DB14: [f64; 28] = [
    -1.7871399683113592e-07, 1.7249946753678127e-06, -4.389704901781394e-06,
    -1.0337209184570774e-05, 6.87550425269751e-05, -4.1777245770372596e-05,
    -0.0003868319473129545, 0.0007080211542355279, 0.001061691085606762,
    -0.0038496388680221874, -0.000746218989268385, 0.01278949326633341,
    -0.005615049530356959, -0.030185351540390634, 0.026981408307912916,
    0.05523712625921604, -0.07154895550404614, -0.08674841156816969,
    0.1399890165844607, 0.1383952138648066, -0.21803352999327605,
    -0.27168855227874805, 0.21867068775890652, 0.6311878491048568,
    0.5543056179408938, 0.2548502677926214, 0.0623647588493989,
    0.006461153460087948,
];

pub(crate) const DB15: [f64; 30] = [
    6.133359913305752e-08, -6.316882325881664e-07, 1.8112704079405772e-06,
    3.36298718173758e-06, -2.8133296266047814e-05, 2.5792699155318936e-05,
    0.00015589648992059973, -0.0003595652443624688, -0.000373482354137617,
    0.0019433239803822114, -0.00024175649076162427, -0.006487734560315745,
    0.005101000360407543, 0.015083918027835902, -0.020810050169693083,
    -0.025767007328439964, 0.05478055058450761, 0.033877143923507685,
    -0.1111209360372317, -0.039666176555790945, 0.190146714007123,
    0.06528295284877282, -0.28888259656696563, -0.19320413960914543,
    0.3390025354547315, 0.6458131403574243, 0.4926317717081396,
    0.20602386398699574, 0.04674339489276627, 0.004538537361578899,
];

pub(crate) const DB16: [f64; 32] = [
    -2.109339630100743e-08, 2.3087840868575457e-07, -7.363656785451205e-07,
    -1.0435713423116066e-06, 1.1336608661276258e-05, -1.3945668988208893e-05,
    -6.103596621410936e-05, 0.00017478724522533817, 0.00011424152003872239,
    -0.0009410217493595676, 0.00040789698084971285, 0.003128023381206269,
    -0.00364427962149839, -0.006990014563413916, 0.013993768859828731,
    0.01029765964095597, -0.03688839769173014, -0.007588974368857738,
    0.07592423604427631, -0.006239722752474872, -0.1323883055638104,
    0.027340263752716042, 0.2111906939471043, -0.027918208133028276,
    -0.3270633105279177, -0.08975108940248964, 0.4402902568863569,
    0.637356332083789, 0.4303127228460038, 0.16506428348885313,
    0.034907714323673344, 0.003189220925347738,
];

pub(crate) const DB17: [f64; 34] = [
    7.2674929685616085e-09, -8.42394844600268e-08, 2.957700933316857e-07,
    3.0165496099945573e-07, -4.505942477222988e-06, 6.9906009850767515e-06,
    2.3186813798745952e-05, -8.204803202453391e-05, -2.5610109566548458e-05,
    0.0004394654277686437, -0.00032813251940983797, -0.0014368453048029762,
    0.0023012052421535457, 0.0029679966915260947, -0.008602921520322855,
    -0.003042989981354637, 0.02273367658394627, -0.0032709555358192938,
    -0.04692243838926974, 0.022312336178103798, 0.08110598665416088,
    -0.05709141963167693, -0.1268156917782863, 0.10113548917747027,
    0.197310589565011, -0.1265997522158827, -0.32832074836396175,
    0.027314970403293636, 0.5183157640569378, 0.6109966156846228,
    0.37035072415264114, 0.1312149033078244, 0.025985393703606044,
    0.0022418070010373128,
];

pub(crate) const DB18: [f64; 36] = [
    -2.5079344549485983e-09, 3.068835863045175e-08, -1.1760987670282317e-07,
    -7.691632689885177e-08, 1.7687129836276155e-06, -3.332634478885822e-06,
    -8.520602537446696e-06, 3.7412378807400385e-05, -1.5359171235347246e-07,
    -0.00019864855231174796, 0.0002135815619103407, 0.0006284656829651457,
    -0.0013405962983361066, -0.0011187326669924971, 0.004943343605466738,
    0.00011863003385811746, -0.013051480946612001, 0.006262167954305707,
    0.02667070592647059, -0.023733210395860002, -0.044526141902982326,
    0.057051247738536884, 0.06488721621190545, -0.10675224665982849,
    -0.09233188415084628, 0.1670813127632574, 0.14953397556537779,
    -0.21648093400514298, -0.29365404073655876, 0.14722311196992816,
    0.5718016548886513, 0.5718268077666072, 0.3146789413370317,
    0.10358846582242359, 0.019288531724146376, 0.0015763102184407605,
];

pub(crate) const DB19: [f64; 38] = [
    8.666848838997619e-10, -1.1164020670358259e-08, 4.6369377757826045e-08,
    1.4470882987978445e-08, -6.862755657769143e-07, 1.531931476691193e-06,
    3.0109643162965265e-06, -1.6640176297154945e-05, 5.105950487073886e-06,
    8.711270467219923e-05, -0.00012460079173415878, -0.000260676135678628,
    0.0007358025205054352, 0.00034180865345859575, -0.002687551800701582,
    0.0007689543592575484, 0.007040747367105243, -0.005866922281012175,
    -0.013988388678535142, 0.019375549889176127, 0.02162376740958505,
    -0.04567422627723091, -0.02650123625012304, 0.08690675555581223,
    0.027584350625628667, -0.1427856950387366, -0.03351854190230288,
    0.21234974330627848, 0.07465226970810326, -0.28583863175582624,
    -0.22809139421548263, 0.26089495265103885, 0.6017045491275379,
    0.5244363774646549, 0.26438843174089677, 0.08127811326545956,
    0.014281098450764397, 0.0011086697631817106,
];

pub(crate) const DB20: [f64; 40] = [
    -2.9988364896193194e-10, 4.056127055551833e-09, -1.814843248299696e-08,
    2.0143220235505126e-10, 2.6339242262700013e-07, -6.847079597000557e-07,
    -1.0119940100188862e-06, 7.2412482876736205e-06, -4.376143862183997e-06,
    -3.710586183394713e-05, 6.77428082837773e-05, 0.00010153288973670291,
    -0.00038510474869921763, -5.349759843997695e-05, 0.0013925596193231364,
    -0.0008315621728225569, -0.0035814942596096226, 0.004420542387045791,
    0.006721627302259457, -0.01381052613715192, -0.00878932492390156,
    0.03229429953076958, 0.005874681811811827, -0.06172289962468046,
    0.005632246857307436, 0.10229171917444256, -0.024716827338613585,
    -0.15545875070726795, 0.0398502464577712, 0.22829105081991632,
    -0.016727088309077008, -0.32678680043403496, -0.13921208801148388,
    0.36150229873933104, 0.6104932389385939, 0.4726961853109017,
    0.21994211355139703, 0.06342378045908152, 0.010549394624950399,
    0.0007799536136668463,
];

pub(crate) const DB21: [f64; 42] = [
    1.0388055710237066e-10, -1.4719541976503653e-09, 7.058033541231122e-09,
    -2.2540149746733303e-09, -1.0004008790305973e-07, 2.9921366304648526e-07,
    3.1660954423670305e-07, -3.0900171645456993e-06, 2.790330539814487e-06,
    1.535482509276049e-05, -3.4996659849874476e-05, -3.635520250086338e-05,
    0.00019366465041650805, -3.196406277680437e-05, -0.0006906711170821016,
    0.0006394185005120303, 0.001716607040630624, -0.002958374038932831,
    -0.0028913343485889014, 0.008988824381971912, 0.002403470920805435,
    -0.02089205367797908, 0.0033577563903381107, 0.039726835427850445,
    -0.018653859202118515, -0.06497750489373232, 0.04572340574922879,
    0.09660039032372422, -0.08177594298086382, -0.1399404249325472,
    0.1152332984396871, 0.2115645276808724, -0.11239707156845098,
    -0.3356640895305295, -0.03572291961725529, 0.4445904519276003,
    0.6015060949350038, 0.4196879449393628, 0.1813596254403815,
    0.049247771538177276, 0.007776639052354784, 0.0005488225098526838,
];

pub(crate) const DB22: [f64; 44] = [
    -3.602113484339555e-11, 5.33593882166749e-10, -2.729623146632976e-09,
    1.6801714049229888e-09, 3.7612287493373625e-08, -1.2833362287517545e-07,
    -8.779879873361287e-08, 1.2951820573188775e-06, -1.5651791319951602e-06,
    -6.166729316467578e-06, 1.7373756957561893e-05, 1.1374349662125932e-05,
    -9.40522363481576e-05, 4.345899904532003e-05, 0.0003286094142136787,
    -0.00042378739983918006, -0.0007706909881231197, 0.0018270104956572791,
    0.0010442607391860253, -0.005455691986156717, 0.0003001373985076436,
    0.012564725218343373, -0.006213782849364659, -0.023480001344493188,
    0.02058670762756536, 0.03697084662069802, -0.046530811827506714,
    -0.05136425429744413, 0.08455737636682607, 0.06807631439273222,
    -0.1317681376866834, -0.09711079840911471, 0.1799731879928913,
    0.16409318810676649, -0.2005684061048871, -0.3127265804282962,
    0.07372450118363015, 0.5079010906221639, 0.5784327310095244,
    0.3677286834460375, 0.14836754089011142, 0.03806993723641108,
    0.0057218546313345395, 0.00038626323149109823,
];

pub(crate) const DB23: [f64; 46] = [
    1.250203302351041e-11, -1.9324051113134174e-10, 1.0504464536965433e-09,
    -9.472885901812052e-10, -1.3999354954379989e-08, 5.4175491795392784e-08,
    1.853091785633965e-08, -5.339005405209421e-07, 8.147574834779447e-07,
    2.39756954684024e-06, -8.347875567854625e-06, -2.6352078892491864e-06,
    4.426071203109246e-05, -3.378894834120904e-05, -0.0001500218503490341,
    0.00025676245200787374, 0.00031942049270990115, -0.0010612312288866513,
    -0.0002465014005163512, 0.003122876449818145, -0.0011348654733562516,
    -0.007075319273706152, 0.006031840650024163, 0.012751943931528287,
    -0.017537101003035845, -0.01852351365015616, 0.038495332522569196,
    0.021765856834499976, -0.0702073915749011, -0.02112621235622724,
    0.11229704361810729, 0.0202830745756493, -0.16401132153187592,
    -0.03303744709428938, 0.22357365824204023, 0.09212540708241805,
    -0.27140209860784303, -0.2613921480306441, 0.18139262536384002,
    0.5510185172419194, 0.5449311478735205, 0.3184508138528652,
    0.12051553178397194, 0.029310003657884116, 0.004202748893183833,
    0.00027190419412828886,
];

pub(crate) const DB24: [f64; 48] = [
    -4.34278250380371e-12, 6.99180115763823e-11, -4.0246586445843797e-10,
    4.748375824256231e-10, 5.157776789672e-09, -2.2557403881760862e-08,
    -5.0576454197925e-10, 2.1663396532785745e-07, -4.032507756879972e-07,
    -8.980253143938407e-07, 3.901100338597703e-06, 1.3411577508091147e-08,
    -2.0228882926126976e-05, 2.1832414604665582e-05, 6.559388639305635e-05,
    -0.0001460079817762617, -0.00011812332379695547, 0.000586127059318311,
    -4.41618485614152e-05, -0.0016964568189748244, 0.0011537649368394815,
    0.0037360461782825235, -0.004746568786323114, -0.006291435370018188,
    0.013049970871085736, 0.007661721881646586, -0.02821310709490189,
    -0.004944709428125628, 0.05130162003998088, -0.004578436241819222,
    -0.08216165420800167, 0.020980113709144814, 0.12101630346922423,
    -0.038777173577920016, -0.1711753513703469, 0.04252872964148383,
    0.23923738878031087, 0.004776613684344728, -0.31794307899936275,
    -0.18727140688515623, 0.2809855532337119, 0.574939221095542,
    0.504371040839925, 0.2729089160677263, 0.0972622358336252,
    0.02248233994971641, 0.0030820817149054946, 0.00019143580094755136,
];

pub(crate) const DB25: [f64; 50] = [
    1.5096920828239108e-12, -2.5276251634656447e-11, 1.5359015701626572e-10,
    -2.228474910228169e-10, -1.8804157550621554e-09, 9.279224480081372e-09,
    -2.6115985561117707e-09, -8.656941732278507e-08, 1.9228067901423717e-07,
    3.212037518862519e-07, -1.7792013326536346e-06, 5.232827708153076e-07,
    8.990661393062588e-06, -1.2771952931997837e-05, -2.7330481199600417e-05,
    7.904640003965528e-05, 3.543714523276059e-05, -0.0003098800990984698,
    0.00011532124404663005, 0.0008772581936748275, -0.000899977423746295,
    -0.0018424842902033313, 0.003322707773973192, 0.0027269362587384956,
    -0.008860702618046369, -0.0019894257822027366, 0.018922804476627628,
    -0.0030798367948470366, -0.03404232046065334, 0.015542605929102291,
    0.0536179093987795, -0.03717396286112251, -0.0770841110565742,
    0.0667521644940186, 0.10663380501847795, -0.09850861528996022,
    -0.15056021375057962, 0.11815528671995985, 0.2245378197451017,
    -0.08758761458765466, -0.3364730796417461, -0.09717464096463814,
    0.3678850748029467, 0.5816368967460578, 0.4596834151460946,
    0.23169350788602183, 0.07803586287213267, 0.017186741254040155,
    0.0022569595918547794, 0.0001348029793470189,
];

pub(crate) const DB26: [f64; 52] = [
    -5.251871224244435e-13, 9.130510016371797e-12, -5.840408185341171e-11,
    1.0023031910465269e-10, 6.780047245828637e-10, -3.776010478532324e-09,
    2.169328259850323e-09, 3.40779562129073e-08, -8.90446637016859e-08,
    -1.0790042375786714e-07, 7.939210633709952e-07, -4.6504632206402627e-07,
    -3.887400161856795e-06, 7.000078682964987e-06, 1.074221540872195e-05,
    -4.1096739963914775e-05, -5.277795493037869e-06, 0.00015747952386074935,
    -0.0001060574748283804, -0.00043195570742618077, 0.0006161382204574344,
    0.0008383488056543616, -0.002145530281567621, -0.000939058250473829,
    0.005601947239423805, -0.0005287383992626815, -0.01178549790619303,
    0.005829580555318888, 0.020734920179963826, -0.017760903568358185,
    -0.03137811036306776, 0.03853571597111186, 0.042232185796372036,
    -0.06865475960403591, -0.053448561681483195, 0.10648240524980863,
    0.06982318611329237, -0.1479771932752545, -0.10432390028592704,
    0.18275540958967237, 0.1812918323111227, -0.1748399612893925,
    -0.32638459369178, 0.0017740767809866858, 0.43915831178916626,
    0.5736690430342223, 0.4132929622783564, 0.1950394387167701,
    0.062274744025149605, 0.0130975542925585, 0.0016505202335329882,
    9.493795750710593e-05,
];

pub(crate) const DB27: [f64; 54] = [
    1.828188352882425e-13, -3.295790122476586e-12, 2.2136620880676626e-11,
    -4.3749862242936544e-11, -2.415526928011131e-10, 1.5216149847785218e-09,
    -1.3094656068569551e-09, -1.3213322739900565e-08, 4.0262550528669086e-08,
    3.2865589680551595e-08, -3.4724681473943893e-07, 3.050880686251999e-07,
    1.6343696247256378e-06, -3.657500908187105e-06, -3.901164070638425e-06,
    2.0634426477368854e-05, -3.5174836149074453e-06, -7.711145517797584e-05,
    7.660058387068577e-05, 0.00020197198796903268, -0.00038790185741013276,
    -0.00034183512269154277, 0.001301177450244135, 0.00014575296259317286,
    -0.0033328544695200063, 0.0013426268773036795, 0.0068566356096848805,
    -0.005862096345462926, -0.011577186458976282, 0.015665595648924578,
    0.016146966922395666, -0.03273906663102087, -0.018512493561998078,
    0.05796940573471799, 0.01731101826549371, -0.09102290652956592,
    -0.014062751555808765, 0.13119797171715533, 0.015799397460240484,
    -0.1780317409590086, -0.03878641863180231, 0.22727328841417083,
    0.11482301951778535, -0.24826458190326056, -0.2897168033145949,
    0.10284085506182292, 0.493406122677999, 0.5538498609904801,
    0.3671102141253898, 0.16292202750239332, 0.04945259998290488,
    0.00995258878087662, 0.0012055312316732133, 6.687131385431931e-05,
];

pub(crate) const DB28: [f64; 56] = [
    -6.367772354714857e-14, 1.1888505334059015e-12, -8.3654904712588e-12,
    1.8673672637833906e-11, 8.492220011056382e-11, -6.077041247229011e-10,
    6.944540328946227e-10, 5.044047056383437e-09, -1.78413869087571e-08,
    -8.262387315626558e-09, 1.4906600135353622e-07, -1.7574611732098427e-07,
    -6.670215479954893e-07, 1.8403637345177692e-06, 1.2479003175748342e-06,
    -1.0043260413334226e-05, 4.638664981394295e-06, 3.6414012110508025e-05,
    -4.9077134161902505e-05, -8.903901490044488e-05, 0.00022957909822334563,
    0.00011546560636589213, -0.000748674955911463, 0.00014156723931404644,
    0.0018759986682027956, -0.0013603738456396924, -0.003725461247074255,
    0.0047848631124542415, 0.005838816627748945, -0.01206359196821849,
    -0.006815549764552309, 0.024688060010151867, 0.004431732910062988,
    -0.04333336861608628, 0.0034480189555409512, 0.06774789550190934,
    -0.0173419228313059, -0.09768535580565244, 0.0344786312750997,
    0.1346275679102261, -0.04683823374455168, -0.18287733073298493,
    0.03690688531571127, 0.24580815137375955, 0.0328578791633871,
    -0.30132780953264177, -0.23049895404758253, 0.20017614404598444,
    0.5305162934414858, 0.5249982316303355, 0.32256336128552243,
    0.13513791425364105, 0.039092608115405346, 0.007542650377646859,
    0.000879498515984387, 4.710807775014051e-05,
];

pub(crate) const DB29: [f64; 58] = [
    2.219191311588303e-14, -4.2856548700683443e-13, 3.1527624133703105e-12,
    -7.832509733627818e-12, -2.940589250764533e-11, 2.4070994535093427e-10,
    -3.426800863263089e-10, -1.893995386171984e-09, 7.768978854770062e-09,
    1.0765919066191961e-09, -6.286156922010786e-08, 9.387197411095864e-08,
    2.633898386997697e-07, -8.975701750636281e-07, -3.029054592052818e-07,
    4.7506092464525525e-06, -3.5936448040251875e-06, -1.6573283953066164e-05,
    2.913344750169041e-05, 3.645026068562775e-05, -0.00012930448400807207,
    -2.2920180412145e-05, 0.0004111283454742767, -0.00020007113630767797,
    -0.0010007783270856805, 0.001087053942226063, 0.0018771209257236502,
    -0.0034737989896811007, -0.0025508071277894726, 0.008469725493560752,
    0.001737880332720511, -0.01704122457360669, 0.002648327307678168,
    0.02947043187174764, -0.012917142554266795, -0.04518798127778834,
    0.030531543272704135, 0.06347916458421186, -0.055027489525325726,
    -0.0851254926156355, 0.08322074716244976, 0.11447229589381826,
    -0.10784594993872142, -0.16087798859418773, 0.11241917487318838,
    0.23610523615302595, -0.055706800072940856, -0.33004094891758806,
    -0.15402873445990006, 0.2891052383358292, 0.5513744327583752,
    0.4897588047621993, 0.28065345597098296, 0.11137011695174052,
    0.030773580221408376, 0.0057021265177733755, 0.0006409516803044435,
    3.318966279841525e-05,
];

pub(crate) const DB30: [f64; 60] = [
    -7.737942630954405e-15, 1.54399757084762e-13, -1.1852375921015822e-12,
    3.239428638532286e-12, 1.0001051313931712e-11, -9.461387997276803e-11,
    1.6136229782709042e-10, 6.984862691832183e-10, -3.331105680467578e-09,
    5.553397861397054e-10, 2.6054427549776254e-08, -4.7643799651394533e-08,
    -1.0004146823545009e-07, 4.2616623260115723e-07, 1.0994743385262033e-08,
    -2.1872676769961665e-06, 2.3275490984936866e-06, 7.252145535890469e-06,
    -1.6361524787254266e-05, -1.3397168632939717e-05, 6.982008370808328e-05,
    -8.54830546758407e-06, -0.00021617183011696337, 0.00017248258423517096,
    0.0005050948239033468, -0.0007678782504380919, -0.0008609276968110424,
    0.002324520094060099, 0.0008433845866620934, -0.005530730148192003,
    0.0006196717564977244, 0.01091563165830489, -0.005296859666131087,
    -0.01839974386811734, 0.015287960769857396, 0.027078619595294184,
    -0.03226375891935221, -0.03567339749675961, 0.0567123657447357,
    0.04380166467141773, -0.08765869003638366, -0.053806465458257076,
    0.12274774604500938, 0.07277865897036442, -0.1572368179599938,
    -0.11455821943270778, 0.17782987324483673, 0.19946212158066431,
    -0.14196851333008292, -0.3329669750208556, -0.06618367077593731,
    0.36624268337162796, 0.5575722329128364, 0.4504878218533178,
    0.2420206709402141, 0.0912383040670157, 0.02413083267158838,
    0.004300797165048069, 0.0004666379504285509, 2.3386161727314215e-05,
];

pub(crate) const DB31: [f64; 62] = [
    2.6993828797626656e-15, -5.5594420505790146e-14, 4.4454670962919323e-13,
    -1.324334917243963e-12, -3.32700896712598e-12, 3.6921088088711296e-11,
    -7.348930032486264e-11, -2.524043954153353e-10, 1.4085681510251775e-09,
    -6.474311687959861e-10, -1.0615296021502523e-08, 2.3283097138214097e-08,
    3.6168265173310047e-08, -1.9759251291702062e-07, 5.327250656974915e-08,
    9.810015422044372e-07, -1.3690602309429407e-06, -3.0351423658915096e-06,
    8.795301342692988e-06, 4.034520235184279e-06, -3.631255157860086e-05,
    1.501335727444533e-05, 0.00010895843504167668, -0.00012434116172502287,
    -0.00023965834694029495, 0.0004998816175637223, 0.00034313982969047345,
    -0.001459041741985161, -6.397901106014601e-05, 0.0033930667767159317,
    -0.00142826422321891, -0.006520852375874612, 0.005516163573310993,
    0.010517639487371841, -0.01390055293926653, -0.01427627527776352,
    0.02804761936675617, 0.016154171565985913, -0.04861907546485433,
    -0.014880026618104822, 0.07535361174328141, 0.01094129745236497,
    -0.10761277332349563, -0.008139832273469236, 0.1450895009319932,
    0.015436988429488934, -0.18696236089571544, -0.04992634916046824,
    0.2249667114737371, 0.14017828876527327, -0.21797848552356336,
    -0.3109551183195075, 0.027169212497369463, 0.4294688082061373,
    0.5511398409142755, 0.40919220003742784, 0.20701287448523534,
    0.07433609301164788, 0.018853691612985914, 0.0032368840686277213,
    0.0003394122037769957, 1.648013386456141e-05,
];

pub(crate) const DB32: [f64; 64] = [
    -9.421019139535079e-16, 2.000715303810525e-14, -1.6638004894334023e-13,
    5.361482229611802e-13, 1.0756106535010622e-12, -1.4309187651692024e-11,
    3.263270741332908e-11, 8.904723796221606e-11, -5.881091462634606e-10,
    4.3843877999404743e-10, 4.250422311980593e-09, -1.104383021722649e-08,
    -1.2199243594833731e-08, 8.965966311957729e-08, -5.00336186874823e-08,
    -4.285970693151457e-07, 7.560047625595948e-07, 1.202889036321621e-06,
    -4.558309576264423e-06, -6.361781532260255e-07, 1.8242684019806914e-05,
    -1.2940457794055127e-05, -5.259809282684323e-05, 8.103678329134838e-05,
    0.00010539154617398281, -0.0003059654423826912, -0.00010245373106073962,
    0.0008673058518450555, -0.0002211678729579098, -0.0019647405558217783,
    0.0014689551004684678, 0.003627224640687865, -0.004649216751184412,
    -0.005411568257275791, 0.011017400715406881, 0.006167527310685675,
    -0.021662822836391194, -0.004145907660827218, 0.03705145792354468,
    -0.0023802644649325738, -0.05692631406247844, 0.014106151516106608,
    0.08087414063848396, -0.029627872508447704, -0.10945611311608938,
    0.04440490819993974, 0.14523207947528666, -0.04899511718467174,
    -0.1921023447085469, 0.024662444839697404, 0.24831064235688016,
    0.06471335480551624, -0.2774215815584272, -0.26669818147667557,
    0.12063053826561783, 0.4778091637339484, 0.5343179193409539,
    0.36750962859734965, 0.1757507836394389, 0.06025749912033537,
    0.014681046381419136, 0.002431261919572266, 0.00024665669063809033,
    1.1614633021350149e-05,
];

pub(crate) const DB33: [f64; 66] = [
    3.289373678416306e-16, -7.196510545363322e-15, 6.214740247174398e-14,
    -2.1524883868333026e-13, -3.343481218953279e-13, 5.509414720765525e-12,
    -1.4202368598899367e-11, -3.0495744539458635e-11, 2.426833102305682e-10,
    -2.496402105246194e-10, -1.6713926772519324e-09, 5.111211857347454e-09,
    3.6728635768381814e-09, -3.9878381985188806e-08, 3.377972703730854e-08,
    1.8224433325710535e-07, -3.985791291985944e-07, -4.4269234079528704e-07,
    2.2883712761415273e-06, -3.607516102879772e-07, -8.866121366757737e-06,
    9.070805757828453e-06, 2.4233353988168903e-05, -4.9295644234173015e-05,
    -4.1604385162737096e-05, 0.00017804318982512455, 4.3931662517661856e-06,
    -0.0004908329007590351, 0.0002727305847336937, 0.0010743806963512913,
    -0.001204309257604659, -0.001860718214455796, 0.003480800953405712,
    0.0023890624081659086, -0.00795354038705794, -0.0015942887824146048,
    0.015316954115857666, -0.002167758617353607, -0.025728761754732973,
    0.010703265820019549, 0.038687060760244966, -0.025248582977476498,
    -0.05347125133582229, 0.04573456189389668, 0.07019114394099653,
    -0.07030248505405616, -0.09114696835133149, 0.09478808805061596,
    0.12196785640373461, -0.11084413311671079, -0.17142809905185932,
    0.09985155868033815, 0.24542061211927912, -0.01927833943695276,
    -0.31599741076656024, -0.20420262239854212, 0.20958235071305542,
    0.5112547705832675, 0.5093761725149396, 0.32671813011770756,
    0.14818631318005282, 0.04861466653171619, 0.01139594337458161,
    0.0018227094351640843, 0.00017910161537027915, 8.186358314175091e-06,
];

pub(crate) const DB34: [f64; 68] = [
    -1.14894475448059e-16, 2.5873383819356996e-15, -2.3170837039064084e-14,
    8.579194051799733e-14, 9.799451158211598e-14, -2.1078791089153017e-12,
    6.0801253540001675e-12, 1.0042087354617698e-11, -9.90477453763241e-11,
    1.3004103186094153e-10, 6.446378210323402e-10, -2.316501946995483e-09,
    -8.665744261368722e-10, 1.740423332936068e-08, -1.990346501531737e-08,
    -7.52670174041259e-08, 2.0259906666678593e-07, 1.448195708333185e-07,
    -1.1163065348170084e-06, 4.979718101421308e-07, 4.169871758547028e-06,
    -5.710826510998304e-06, -1.0576574942579506e-05, 2.8449514196978075e-05,
    1.3531172272496496e-05, -9.914697770780135e-05, 2.660050018453442e-05,
    0.00026507723975580577, -0.00023267321402335316, -0.0005527355762144198,
    0.0008751999064078689, 0.0008589959874363662, -0.002399453943537056,
    -0.0007692127975067837, 0.005334950768759936, -0.0006194748845153873,
    -0.01004550670836152, 0.00471364926099981, 0.01640937419986519,
    -0.013143980016657161, -0.023671737922826366, 0.027228350756354196,
    0.030739746573959344, -0.04743855964527776, -0.03701283841786245,
    0.0731852354367956, 0.043576094649631296, -0.10294759699281408,
    -0.05448296806413905, 0.13412596027113613, 0.07799184693794811,
    -0.1609249271778668, -0.12733735822380116, 0.16660175041220746,
    0.21690722018742759, -0.10389191551564048, -0.33152530150838694,
    -0.12824684217443716, 0.290366329507275, 0.5305550996564632,
    0.47847874627937104, 0.28776505923371454, 0.1241524821113768,
    0.03904884135178594, 0.008819889403884978, 0.00136406139005905,
    0.000129947620067953, 5.770510632730285e-06,
];

pub(crate) const DB35: [f64; 70] = [
    4.0146287123334886e-17, -9.298012529324185e-16, 8.624037434720089e-15,
    -3.3977208567962675e-14, -2.5979543288938482e-14, 8.015088533687901e-13,
    -2.5670654761550815e-12, -3.1256393571085576e-12, 4.0005366272537445e-11,
    -6.407938256501889e-11, -2.433545573751673e-10, 1.0308233454854333e-09,
    5.897951310384362e-11, -7.458116552893037e-09, 1.0849027337899348e-08,
    3.008188650719067e-08, -9.990396944534901e-08, -3.700308378205125e-08,
    5.302368616904761e-07, -3.9039317332873064e-07, -1.8959296176931532e-06,
    3.35334586287131e-06, 4.308047861716731e-06, -1.5724420772702817e-05,
    -2.43700152682779e-06, 5.30414312291331e-05, -2.9769959628485097e-05,
    -0.00013658830722611617, 0.0001700012283661249, 0.0002648328819961289,
    -0.0005864810318991818, -0.0003346692164250855, 0.001549637469702363,
    7.615969435172737e-06, -0.0033576443809223834, 0.0014280887940707622,
    0.006137754586740521, -0.00508599164923343, -0.00957779789923571,
    0.012289436008118711, 0.012766456715656745, -0.024169497801660268,
    -0.014366839784220072, 0.04125469306470509, 0.013228549585036555,
    -0.06335603744044346, -0.009318558949903924, 0.08991354757072954,
    0.004734229172641949, -0.12058552264339356, -0.004752680834111351,
    0.1552924803962371, 0.01930954466601835, -0.19191958929859396,
    -0.06526287131067754, 0.2172992893210893, 0.16604135749078092,
    -0.18178697676672784, -0.32382286491211615, -0.04388388187393404,
    0.36034564051804735, 0.5370084275091661, 0.4435927392240354,
    0.2513073789944933, 0.10340445586147838, 0.031236288511490715,
    0.006807292884319132, 0.0010191226803750982, 9.42146947557674e-05,
    4.067934061148559e-06,
];

pub(crate) const DB36: [f64; 72] = [
    -1.4032741753731907e-17, 3.339971984818693e-16, -3.2046285434017497e-15,
    1.3380713862991059e-14, 5.542263182639804e-15, -3.029285026974877e-13,
    1.070969357114017e-12, 8.876846287217375e-13, -1.599716689261357e-11,
    3.037429098112535e-11, 8.962418203859612e-11, -4.5125457785632494e-10,
    1.0908155537137518e-10, 3.138841695782424e-09, -5.612784343327791e-09,
    -1.1560936888170085e-08, 4.799043465450992e-08, 2.753249073339512e-09,
    -2.4553776584342327e-07, 2.5484235225565776e-07, 8.311421279707779e-07,
    -1.8708116028591808e-06, -1.5861457824345775e-06, 8.372218198160788e-06,
    -1.183471059985616e-06, -2.7313908246543378e-05, 2.3751066836608608e-05,
    6.69474119693059e-05, -0.00011318994680846657, -0.00011551188958435271,
    0.00036935072849675105, 8.614565758992702e-05, -0.0009463403823261102,
    0.0002776812795712026, 0.0019907937718517373, -0.0015030740662966438,
    -0.0034845414454048834, 0.004413484835350576, 0.005022989106665829,
    -0.009990263473281372, -0.005657813245058818, 0.01906359478062536,
    0.003984040198717005, -0.0319807206776397, 0.0014249726617653917,
    0.04851308354780909, -0.011319100316817429, -0.06820901663681751,
    0.02503872144956849, 0.09115678225801654, -0.03988085357551317,
    -0.11880375431013564, 0.05027618007353843, 0.1541062366276429,
    -0.045861400746392715, -0.19933720560864962, 0.007278515095792229,
    0.2465372776089742, 0.09811420416311477, -0.24680703697812553,
    -0.2944210395891146, 0.04397519752934863, 0.4178753356009698,
    0.5322668952607287, 0.4064336977082553, 0.2177569530979008,
    0.08565209259526409, 0.024890565644827965, 0.005240297377409884,
    0.0007602151099668488, 6.826028678546358e-05, 2.867925182755946e-06,
];

pub(crate) const DB37: [f64; 74] = [
    4.9066150649352034e-18, -1.1992803358528796e-16, 1.1890123875082528e-15,
    -5.243025691884206e-15, -4.518889607463727e-16, 1.1380528309214397e-13,
    -4.4216124098721056e-13, -2.0963631942348006e-13, 6.3349554409739135e-12,
    -1.3984157155376414e-11, -3.203398244123242e-11, 1.946164894082315e-10,
    -1.031411129096975e-10, -1.297205001469435e-09, 2.793974465953983e-09,
    4.224485706362419e-09, -2.2521938367248057e-08, 5.3506575154614344e-09,
    1.1090312322164394e-07, -1.5098853886715837e-07, -3.494948603445728e-07,
    1.0021213992971776e-06, 4.854731396996412e-07, -4.3099415565970926e-06,
    1.8499450031155903e-06, 1.3543277184167817e-05, -1.6391624961605832e-05,
    -3.09866292761993e-05, 7.055138782065466e-05, 4.336726125945695e-05,
    -0.00022089440324554938, 1.5344390231955034e-05, 0.0005490532773373631,
    -0.00032807884708801983, -0.0011114848653186302, 0.0012639342581174772,
    0.0018168713438014236, -0.0033945232764083988, -0.0022480531870038246,
    0.007387757452855584, 0.0015193057788333991, -0.013763981962894785,
    0.0016904723834844238, 0.022618651544599473, -0.008833493890410233,
    -0.03352358406410097, 0.020972800592597547, 0.045807944151268334,
    -0.03825382947938425, -0.05925681563265897, 0.059567410871529954,
    0.07504761994836018, -0.08233021190655741, -0.09660754061668439,
    0.10178029683881418, 0.12992964695985376, -0.10845171382330178,
    -0.181962291778608, 0.08180602838721862, 0.2515232543602687,
    0.01967150045235939, -0.29437591526266177, -0.24618042976108342,
    0.13087896323302017, 0.4622075536616057, 0.5181670408556229,
    0.36844097240030615, 0.18732633186206493, 0.0705848259771816,
    0.01976228615387959, 0.0040241403682572865, 0.0005662418377066724,
    4.942343750628132e-05, 2.0220608624983923e-06,
];

pub(crate) const DB38: [f64; 76] = [
    -1.7161524510887442e-18, 4.3045968395587903e-17, -4.405307042483461e-16,
    2.0450996767889887e-15, -4.563397162127374e-16, -4.249817819571463e-14,
    1.8086612362745306e-13, 2.626496504065252e-14, -2.4847892375636427e-12,
    6.291537317039508e-12, 1.1016929345994545e-11, -8.278256522538134e-11,
    6.732336490189309e-11, 5.261132557357599e-10, -1.3491977539834489e-09,
    -1.4363294877951358e-09, 1.0347045392748585e-08, -5.424274800287298e-09,
    -4.8847579374592866e-08, 8.400351046895966e-08, 1.3963775455083553e-07,
    -5.187733738874145e-07, -8.487087586072593e-08, 2.1499602699396653e-06,
    -1.5508443501186026e-06, -6.456730428469619e-06, 1.0373591840455998e-05,
    1.3341761499213504e-05, -4.175141648540398e-05, -1.1554091038337172e-05,
    0.00012620433501661708, -4.55568269666842e-05, -0.0003031020460726612,
    0.00028176392503806707, 0.0005810759750532864, -0.0009424614077227377,
    -0.0008448626665537775, 0.0024006977818909732, 0.0007169821821064019,
    -0.005071314509218348, 0.0005625715748403532, 0.00921478503219718,
    -0.004131306656031089, -0.014701882065398682, 0.011290497278685965,
    0.020904645255655243, -0.023114134020549317, -0.026891493880894516,
    0.04005498110511595, 0.03198987753153781, -0.06176620870841316,
    -0.036605103402874296, 0.08720439826203975, 0.04309589543304764,
    -0.11473117071074437, -0.05658645863072738, 0.14141473407338268,
    0.08563812155615105, -0.15991256515824437, -0.1417956859730596,
    0.14998511961871702, 0.2321259638353531, -0.06226650604782432,
    -0.3216756378089979, -0.1828676677083359, 0.2130505713555785,
    0.4933560785171008, 0.4965911753117181, 0.33077578141101466,
    0.1600719935641107, 0.057889943612859256, 0.015637249347572157,
    0.0030830881192537517, 0.00042117026647271163, 3.576251994264023e-05,
    1.4257766416741318e-06,
];

pub(crate) const SYM2: [f64; 4] = [
    0.48296291314469025, 0.836516303737469, 0.22414386804185735,
    -0.12940952255092145,
];

pub(crate) const SYM3: [f64; 6] = [
    0.3326705529509569, 0.8068915093133388, 0.4598775021193313,
    -0.13501102001039084, -0.08544127388224149, 0.035226291882100656,
];

pub(crate) const SYM4: [f64; 8] = [
    0.0322231006040427, -0.012603967262037833, -0.09921954357684722,
    0.29785779560527736, 0.8037387518059161, 0.49761866763201545,
    -0.02963552764599851, -0.07576571478927333,
];

pub(crate) const SYM5: [f64; 10] = [
    0.019538882735286728, -0.021101834024758855, -0.17532808990845047,
    0.01660210576452232, 0.6339789634582119, 0.7234076904024206,
    0.1993975339773936, -0.039134249302383094, 0.029519490925774643,
    0.027333068345077982,
];

pub(crate) const SYM6: [f64; 12] = [
    -0.007800708325034148, 0.0017677118642428036, 0.04472490177066578,
    -0.021060292512300564, -0.07263752278646252, 0.3379294217276218,
    0.787641141030194, 0.4910559419267466, -0.048311742585633,
    -0.11799011114819057, 0.0034907120842174702, 0.015404109327027373,
];

pub(crate) const SYM7: [f64; 14] = [
    0.010268176708511255, 0.004010244871533663, -0.10780823770381774,
    -0.14004724044296152, 0.2886296317515146, 0.767764317003164,
    0.5361019170917628, 0.017441255086855827, -0.049552834937127255,
    0.0678926935013727, 0.03051551316596357, -0.01263630340325193,
    -0.0010473848886829163, 0.002681814568257878,
];

pub(crate) const SYM8: [f64; 16] = [
    0.0018899503327594609, -0.0003029205147213668, -0.01495225833704823,
    0.003808752013890615, 0.049137179673607506, -0.027219029917056003,
    -0.05194583810770904, 0.3644418948353314, 0.7771857517005235,
    0.4813596512583722, -0.061273359067658524, -0.1432942383508097,
    0.007607487324917605, 0.03169508781149298, -0.0005421323317911481,
    -0.0033824159510061256,
];

pub(crate) const SYM9: [f64; 18] = [
    0.0010694900329086053, -0.0004731544986800831, -0.010264064027633142,
    0.008859267493400484, 0.06207778930288603, -0.018233770779395985,
    -0.19155083129728512, 0.035272488035271894, 0.6173384491409358,
    0.717897082764412, 0.238760914607303, -0.05456895843083407,
    0.0005834627461258068, 0.03022487885827568, -0.01152821020767923,
    -0.013271967781817119, 0.0006197808889855868, 0.0014009155259146807,
];

pub(crate) const SYM10: [f64; 20] = [
    -0.0004593294210046588, 5.7036083618494284e-05, 0.004593173585311828,
    -0.0008043589320165449, -0.02035493981231129, 0.005764912033581909,
    0.04999497207737669, -0.0319900568824278, -0.03553674047381755,
    0.38382676106708546, 0.7695100370211071, 0.47169066693843925,
    -0.07088053578324385, -0.15949427888491757, 0.011609893903711381,
    0.0459272392310922, -0.0014653825813050513, -0.008641299277022422,
    9.563267072289475e-05, 0.0007701598091144901,
];

pub(crate) const SYM11: [f64; 22] = [
    0.000687119368856097, 0.0013826742498805067, -0.003918553158856677,
    -0.0027931771087647693, 0.03720235722287959, 0.050941707159755385,
    -0.05408271109647649, -0.02869383834103965, 0.40786874890886016,
    0.768526679794067, 0.4520007834697994, -0.08151515741285748,
    -0.1499464788291984, 0.01825415244255654, 0.023721547819585367,
    -0.027347035111119848, -0.008585286331503357, 0.009874122155829161,
    0.0024053042957380504, -0.0016456213226495563, -0.00024605048313620264,
    0.00012227468089023592,
];

pub(crate) const SYM12: [f64; 24] = [
    -0.00020526600487137938, -0.00017690949629193344, 0.002104447335629671,
    0.0006915974586788278, -0.013053840998593582, -0.001287033317152989,
    0.06005859623424475, 0.031256859883591684, -0.12359121292129573,
    -0.007517992473075242, 0.5166743899411825, 0.7608721850415805,
    0.34345150160951965, -0.08927100096836146, -0.08017578174217259,
    0.030686743515091555, 0.0018619254598864197, -0.025493025089340912,
    -0.0005948327807239624, 0.00863423079172048, 0.0006610376737514791,
    -0.001386550262370246, -8.418262000974747e-05, 9.767610247723154e-05,
];

pub(crate) const SYM13: [f64; 26] = [
    7.042986690696273e-05, 3.690537342323894e-05, -0.0007213643851363755,
    0.0004132611988416782, 0.005674853760123338, -0.0014924472742587286,
    -0.020749686325520652, 0.017618296880645045, 0.09292603089914397,
    0.008819757670429852, -0.14049009311367552, 0.11023022302128688,
    0.6445643839011571, 0.6957391505615691, 0.19770481877126597,
    -0.12436246075150338, -0.059750627717956466, 0.01386249743583841,
    -0.017211642726304387, -0.020216768133395468, 0.005296359738721862,
    0.00752622538996817, -0.00017094285852957213, -0.001136063438927969,
    -3.573862364871594e-05, 6.820325263074355e-05,
];

pub(crate) const SYM14: [f64; 28] = [
    -2.2349526198376276e-05, 2.6172354011525585e-05, 0.0003777346635249395,
    -0.00027100148389039183, -0.002861055793818449, 0.000876139758390644,
    0.012053926501371028, 1.5568501514960417e-05, -0.026866052036322755,
    0.003412995088904644, 0.021778137172461964, -0.10559200315709116,
    -0.11305768039588186, 0.3259474096507534, 0.7519483566354735,
    0.5326256876026231, 0.020249205065083372, -0.10781516768869394,
    0.0431084588082756, 0.07164471292189067, -0.0008941357568047044,
    -0.0173792278244717, 0.0014943551624894205, 0.00412633304909577,
    -0.0002626220148495617, -0.0005625030468108087, 6.0502701743338275e-05,
    5.166546032083359e-05,
];

pub(crate) const SYM15: [f64; 30] = [
    3.729144682523476e-05, 6.359603718362835e-05, -0.00044194831006956356,
    -0.0007073560094912165, 0.00246812215322244, 0.002504890754127978,
    -0.013853079649381813, -0.01358784439721163, 0.04540242988906322,
    0.05650312564039918, -0.0703562086927054, -0.03748575628480675,
    0.4081891068306578, 0.7606441804971572, 0.461705109136779,
    -0.06087194751333965, -0.15348814997118704, 0.01332181894255939,
    0.034271569706280085, -0.024802448419161426, -0.010429501152521885,
    0.015572181007010301, 0.004720933837865321, -0.004923023327123525,
    -0.0013055157937326687, 0.0009902338846618614, 0.00019935168362621234,
    -0.00012233420120889748, -1.2729928173433851e-05, 7.46457579106633e-06,
];

pub(crate) const SYM16: [f64; 32] = [
    5.359038046268959e-06, -6.387996260198792e-06, -0.00010014852036965708,
    8.65111550232669e-05, 0.000874569586713091, -0.0004449474164188862,
    -0.0045399165469086605, 0.0008547749494901028, 0.014702157960279329,
    0.0005364340248225064, -0.026209649251347587, 0.00798660609949865,
    0.019521339077629103, -0.11673387364225705, -0.11888273199735631,
    0.3231022390642957, 0.7467880503688457, 0.5367441345860743,
    0.029993973110139238, -0.10486312987748436, 0.046694175567007015,
    0.077663527045468, -0.0029934480320456796, -0.022975152888161057,
    0.0016338240562740315, 0.006219665992202444, -0.0004837833239505696,
    -0.0012146222998133563, 0.00011797321121147124, 0.00016355529607213693,
    -1.4963117619171127e-05, -1.2552906004588058e-05,
];

pub(crate) const SYM17: [f64; 34] = [
    3.7912531943316247e-06, -2.4527163425740825e-06, -7.607124405602918e-05,
    2.5207933140671322e-05, 0.0007198270642145453, 5.840042869518092e-05,
    -0.003932325279794941, -0.0019054076898564055, 0.012396988366634302,
    0.009952982523507613, -0.01803889724190139, -0.007261634750933915,
    0.01615880872591857, -0.08607087472063264, -0.1550760053497069,
    0.18053958458074407, 0.681488995344317, 0.6507166292043823,
    0.1423983504151139, -0.11856693261099856, 0.01727117821060019,
    0.10475461484219489, 0.01790395221438949, -0.03329138349230622,
    -0.004819212803181354, 0.010482366933016147, 0.0008567700701928022,
    -0.0027416759756781813, -0.00013864230268101327, 0.00047599638026318304,
    -1.3506383399799107e-05, -6.293702597545909e-05, 2.780126693825943e-06,
    4.297343327338256e-06,
];

pub(crate) const SYM18: [f64; 36] = [
    2.8585797878010286e-06, 3.0256644581593817e-06, -4.2310703625579425e-05,
    -1.64453218235497e-05, 0.0003969485072358201, 0.00014069395425098417,
    -0.002139004006730563, -0.00028084691703162806, 0.009666322454585118,
    0.00280887515834088, -0.027251004973967905, -0.0007790523685970396,
    0.09020407690498215, 0.048029047295078765, -0.13026743264613821,
    -0.0118978412263509, 0.503001460118154, 0.7512965133174457,
    0.36909896290350347, -0.07385143649561426, -0.10423935777167966,
    0.013467696268718628, 0.0006090566462244229, -0.033403085127989084,
    -0.0031184530131528917, 0.015667149664448578, 0.0013397324968310628,
    -0.00531253677850914, -0.0002087394092275575, 0.0014833808230492408,
    6.952313804422752e-05, -0.00027629181951584626, -1.7321825660855494e-05,
    2.931804961309726e-05, 1.4637873826467199e-06, -1.3829534251189152e-06,
];

pub(crate) const SYM19: [f64; 38] = [
    2.1970659297755875e-06, 3.887147621522984e-06, -3.410327596926454e-05,
    -5.6494144297573725e-05, 0.0002640638973201635, 0.00038691564951959993,
    -0.0013768845939113878, -0.0015776213758551838, 0.006005645129701798,
    0.0056121273729860454, -0.020951479806816362, -0.020108341586618676,
    0.05385272798790365, 0.06547214923732075, -0.06784042930996621,
    -0.024661285581903933, 0.42047346006746816, 0.753987180014319,
    0.45327779049931355, -0.06654976396372861, -0.16947815921213927,
    0.0037925943648231524, 0.041275043635988815, -0.021160953208180365,
    -0.01251285793184764, 0.018294704065611848, 0.006156115411242735,
    -0.00841527795209326, -0.0026306238027751856, 0.0025726969552313152,
    0.0007468913864060335, -0.0005657753456025618, -0.00013690988953447063,
    8.855101289452674e-05, 1.5067691805558079e-05, -8.94881664302505e-06,
    -7.737635729489904e-07, 4.373411430054182e-07,
];

pub(crate) const SYM20: [f64; 40] = [
    -7.07526377132487e-07, -8.150435841019208e-07, 1.172041908381966e-05,
    7.039041594580236e-06, -0.00011367178778224484, -4.318003062262063e-05,
    0.00071649296084822, 0.00019244778830510888, -0.0032637343263986498,
    -0.0005492137045066001, 0.012117141694831846, 0.0031483526094619233,
    -0.03168094614848459, -0.0016550698400937714, 0.09614395702186032,
    0.05372501065510552, -0.12320639343399896, -0.0005619621789847691,
    0.5082153875715081, 0.747426286798166, 0.3639508219312693,
    -0.08278403182290871, -0.11730744049988545, 0.0076802641157338964,
    0.0025025392652146287, -0.032545000915212036, -0.0024706090844692622,
    0.018095101626382993, 0.0017782736381559592, -0.006749176430844991,
    -0.0003562586609042351, 0.0021667257189551315, 9.838942925781283e-05,
    -0.000520869275964774, -3.3621943027250664e-05, 8.221619649746877e-05,
    5.821483543511801e-06, -7.674702721946562e-06, -3.80817698180495e-07,
    3.305817892407155e-07,
];

pub(crate) const COIF1: [f64; 6] = [
    -0.0727326195128539, 0.3378976624578092, 0.8525720202122554,
    0.38486484686420286, -0.0727326195128539, -0.01565572813546454,
];

pub(crate) const COIF2: [f64; 12] = [
    0.016387336463522112, -0.04146493678175915, -0.06737255472196302,
    0.3861100668211622, 0.8127236354455423, 0.41700518442169254,
    -0.0764885990783064, -0.0594344186464569, 0.023680171946334084,
    0.0056114348193944995, -0.0018232088707029932, -0.0007205494453645122,
];

pub(crate) const COIF3: [f64; 18] = [
    -0.0037935128643808015, 0.0077825964256727454, 0.023452696142077165,
    -0.06577191128146936, -0.06112339000297254, 0.4051769024091182,
    0.7937772226260872, 0.42848347637737, -0.07179982161915484,
    -0.08230192710629981, 0.03455502757329773, 0.015880544863669452,
    -0.009007976136730624, -0.002574517688136797, 0.0011175187708306303,
    0.0004662169598204029, -7.0983302506379e-05, -3.4599773197272774e-05,
];

pub(crate) const COIF4: [f64; 24] = [
    0.000892313902537003, -0.0016294924252267858, -0.00734616793626805,
    0.016068947131575025, 0.026682304669604834, -0.08126671024919373,
    -0.05607731960356926, 0.41530842700068227, 0.7822389344242826,
    0.43438603311435653, -0.06662747236681715, -0.09622042453595264,
    0.03933442260558915, 0.025082253337949608, -0.015211728187697211,
    -0.0056582838001308835, 0.003751434697146086, 0.0012665610789256603,
    -0.0005890202246332164, -0.0002599743371222568, 6.233885431278718e-05,
    3.1229861599195265e-05, -3.2596479400307506e-06, -1.7849909144933466e-06,
];

pub(crate) const COIF5: [f64; 30] = [
    0.0001693470374997982, 0.0002454292191371222, -0.0017975645669803966,
    -0.003870368640201221, 0.009764696835614296, 0.026481324199392788,
    -0.03626310915309988, -0.11354738267027062, 0.09996824974346658,
    0.48613776665918657, 0.4998878796536179, 0.32560394335115556,
    0.3212033960646515, 0.015383802420797007, -0.36932879159224236,
    -0.04206732380008988, 0.3117099299245651, 0.0039585009014064376,
    -0.1898131143804315, 0.02114639219623462, 0.08097911900528101,
    -0.018542509974349128, -0.02302779411721026, 0.007742994822997996,
    0.004010081694040974, -0.0017598532857322144, -0.00036995621014766105,
    0.00020400959940378125, 1.4411247922452106e-05, -9.94381252127469e-06,
];

pub(crate) const COIF6: [f64; 36] = [
    2.657281305146366e-06, -6.46770429988537e-06, -7.958984402102888e-05,
    0.00019983134908708336, 0.0007535256197345287, -0.0021547040608116247,
    -0.0038028834730272293, 0.013517650513128261, 0.012203286010948697,
    -0.06371820717849716, -0.02706472612580389, 0.3689621028978697,
    0.7504762243378382, 0.5057218357443282, -0.05140616495708898,
    -0.16707815308486557, 0.04551881940009789, 0.0720967254630439,
    -0.030095244781277394, -0.026692495091511465, 0.01472003683600591,
    0.0076893821634475695, -0.005241882819915152, -0.0017002361458920564,
    0.001338274443734763, 0.00032311240197810544, -0.00024712122105211714,
    -6.396462573285628e-05, 3.539772849000986e-05, 1.1728226679148527e-05,
    -4.123886207666128e-06, -1.4770297254160697e-06, 3.0829178587063317e-07,
    1.221368234928566e-07, -1.1655000033865314e-08, -4.788501803030709e-09,
];

pub(crate) const COIF7: [f64; 42] = [
    -3.6599257690666173e-08, 8.147456030087121e-08, 1.1900714481472595e-05,
    -2.6635734123771195e-05, -0.00016489652752728893, 0.000414059353798957,
    0.001079949529809347, -0.0031817033367405067, -0.004382537822490281,
    0.016361450463424652, 0.01229277663869572, -0.06854324203029452,
    -0.02522271398928371, 0.3735382263802601, 0.7462049666204577,
    0.5051306729652871, -0.04663531753505125, -0.17207965589669894,
    0.04319745598381145, 0.08017747813488088, -0.031149226943572847,
    -0.03375674870309065, 0.017437589618170903, 0.01171591771799013,
    -0.0075318013351512595, -0.0032663051656176786, 0.0024952661323961733,
    0.00075671561308008, -0.0006356883799339054, -0.00016278581839586728,
    0.00012753743048737204, 3.518210195476533e-05, -2.1020672857980794e-05,
    -6.8548627263340206e-06, 2.846806725629096e-06, 1.0341483595141568e-06,
    -2.868187553092559e-07, -1.1337157326357968e-07, 1.8948535701814764e-08,
    8.02764278756833e-09, -6.13142365782978e-10, -2.754302123691971e-10,
];

pub(crate) const COIF8: [f64; 48] = [
    -7.373924171688512e-07, -2.7626952807923918e-06, 1.1818175540092998e-05,
    5.456510671394287e-05, -8.701267931734173e-05, -0.0005237383695220239,
    0.00040316315613181164, 0.0032320294049981643, -0.0014031313413299159,
    -0.01437939006507475, 0.004248221354182576, 0.04961459842090454,
    -0.012080980996114335, -0.14514756581892652, 0.03133334870026431,
    0.5134436069020993, 0.6378244255663721, 0.3002719423722608,
    0.12507659709639513, 0.06916512988967097, -0.18133556336456627,
    -0.1473063309371173, 0.21029055065195748, 0.13578990674005437,
    -0.1949748856693589, -0.08556955574102415, 0.14441958591215484,
    0.037420835271018194, -0.08529833946317168, -0.009933382710387047,
    0.04010107415029911, 0.0003963920301579124, -0.015039208829827053,
    0.0009342319455497078, 0.00455863757132376, -0.00045964114592512436,
    -0.0011497393451293154, 0.00013035397806131856, 0.0002481358693216124,
    -2.9895574484153825e-05, -4.4713919595165645e-05, 6.455391904978633e-06,
    6.024178373127142e-06, -1.1130881079058256e-06, -5.087457927587302e-07,
    1.15364241383929e-07, 2.0550851507760437e-08, -5.485238337193359e-09,
];

pub(crate) const COIF9: [f64; 54] = [
    1.1651261634843108e-08, 1.1079372901717914e-07, -5.3946767609667126e-08,
    -2.6073340698249366e-06, -1.6187793342181689e-06, 3.0290553569821916e-05,
    2.508182992284691e-05, -0.00023017683382219658, -0.00018292408554318592,
    0.001285350265455426, 0.0008650990310835029, -0.005668607344932196,
    -0.0029521824056741373, 0.02111157360049533, 0.007668205580848188,
    -0.07409303408041895, -0.01564126553721227, 0.37534878883618794,
    0.7326525597642327, 0.5121777221874976, -0.033814889203543,
    -0.18888305837996575, 0.03653524973880192, 0.10161154349924867,
    -0.03232586131898369, -0.05251988883176474, 0.023428715577231952,
    0.023674362394228966, -0.013883363324440142, -0.008899554162352311,
    0.006707996373823011, 0.0027189588554737327, -0.002639841703890719,
    -0.0006736798797928129, 0.0008509542249409703, 0.00014333074241198424,
    -0.0002292108086656547, -3.0286733229478335e-05, 5.352756708581016e-05,
    6.876513210017801e-06, -1.1198406367267063e-05, -1.4454259076250178e-06,
    2.076548538714729e-06, 2.392145572014981e-07, -3.24309009767869e-07,
    -2.9720597614059022e-08, 4.0859747706663864e-08, 2.537212168904728e-09,
    -3.986566702834324e-09, -7.321204309910554e-11, 2.6516545148422684e-10,
    -7.730935054645415e-12, -1.0138584994556272e-11, 1.0661912675613007e-12,
];

pub(crate) const COIF10: [f64; 60] = [
    -4.733731997234974e-09, -2.8789040236316174e-08, 7.362852317962545e-08,
    7.112842212476013e-07, -3.8490898109745504e-07, -8.605262503307648e-06,
    -5.383251525579649e-07, 6.800108808632587e-05, 2.012417837840223e-05,
    -0.0003955977463467467, -0.00014745825540400653, 0.0018162654396132415,
    0.000669314810901689, -0.006937657770599565, -0.002210019444995165,
    0.023346013714880945, 0.005655142755382462, -0.07679545979557827,
    -0.0115937244250936, 0.3769066567489315, 0.7265312267482033,
    0.513933212570237, -0.026927670682518445, -0.19514871848554707,
    0.031122989187852456, 0.11137472258170905, -0.03011892285027313,
    -0.06298019661306044, 0.024446556220605112, 0.03207942856234342,
    -0.01663975628803686, -0.014090043741102672, 0.009485857482384116,
    0.005184916833756574, -0.004523949397395123, -0.0015639617287694116,
    0.0018073490105907323, 0.0003832543290036522, -0.0006095072646943258,
    -7.886390856946087e-05, 0.0001767916224187173, 1.5435055608824203e-05,
    -4.54307301628368e-05, -3.295658130511236e-06, 1.0606885728496542e-05,
    6.958615430063029e-07, -2.2411769222332404e-06, -1.1506889323954595e-07,
    4.1422104148979037e-07, 1.2106838862095154e-08, -6.457108676606811e-08,
    -2.482725020993999e-10, 8.254972349942884e-09, -2.2099114157841187e-10,
    -8.204868055410966e-10, 5.265685782616893e-11, 5.681428216551948e-11,
    -5.858947584251237e-12, -2.3142793575647296e-12, 3.8053294432598203e-13,
];

pub(crate) const COIF11: [f64; 66] = [
    3.663809827773994e-09, 7.316480382950074e-09, -8.645030805264089e-08,
    -1.7925375833889753e-07, 9.489453510781603e-07, 2.184336420086631e-06,
    -6.405697583893237e-06, -1.7702044081197525e-05, 2.946551634461177e-05,
    0.00010748921335480874, -9.567309905133699e-05, -0.000522157552338696,
    0.0002131824630901106, 0.0021197258173207187, -0.00026041763875679543,
    -0.0074651086060355245, -0.00019791098239288227, 0.023907719314900072,
    0.0019813057716031083, -0.07673503066089421, -0.005950393072739534,
    0.3750956966834417, 0.7193182283982152, 0.5186291336307655,
    -0.019434159140595077, -0.20306523860220047, 0.02511686203031745,
    0.12151023660960719, -0.02694955352032028, -0.07330251390168373,
    0.0242928147468456, 0.040568115963064685, -0.018517629525925384,
    -0.019721328049544597, 0.011976850855243486, 0.008151186232371259,
    -0.006581918165476444, -0.0027544078255917906, 0.003073927570511881,
    0.0007066092264342971, -0.0012195728267455834, -0.00010742462871997636,
    0.00041093260894736825, -9.261540504080163e-06, -0.00011762945066605063,
    1.3141933309162381e-05, 2.8634257524914243e-05, -5.319069908221515e-06,
    -5.933281355604598e-06, 1.4758328543382627e-06, 1.045363302901472e-06,
    -3.169665556270592e-07, -1.556817686146638e-07, 5.458315462764512e-08,
    1.9341652017251428e-08, -7.573831968527793e-09, -1.959797590059236e-09,
    8.355001255687631e-10, 1.5611479170844982e-10, -7.09936610757653e-11,
    -9.193408458950303e-12, 4.382663130872779e-12, 3.5655230225978195e-13,
    -1.7544928978423525e-13, -6.842244531380465e-15, 3.426330892176422e-15,
];

pub(crate) const COIF12: [f64; 72] = [
    -3.207554522022605e-10, -1.4492924420899318e-09, 7.0420712872679e-09,
    4.016031325226149e-08, -6.71900883884724e-08, -5.443582809779202e-07,
    3.1696031453162575e-07, 4.8410462937956045e-06, -1.385740491827645e-07,
    -3.194175539181581e-05, -9.132436932217915e-06, 0.00016745730936170702,
    7.611032762509481e-05, -0.0007288770008226343, -0.00037796660826261945,
    0.002719913874003332, 0.0013742897792293819, -0.008963927996014177,
    -0.003919563284447394, 0.027176547439225106, 0.009064994078915778,
    -0.08302355087019749, -0.01731951345674659, 0.3858184358519452,
    0.7347360309841361, 0.5024214926533658, -0.03699708526844896,
    -0.18142458071921894, 0.041615112832128195, 0.09613488699892404,
    -0.039153771237239274, -0.04735981157948532, 0.030465105600892495,
    0.017628727631662622, -0.019128027784593805, -0.0023344614379410093,
    0.009148267915861276, -0.0030283849305917576, -0.00275842623559547,
    0.003266563752402031, -9.988701984144739e-05, -0.0019653665419627083,
    0.0007637063000557042, 0.0008488341826778418, -0.0005760936210994938,
    -0.0002780421075342436, 0.0002837589090771008, 7.145715882609772e-05,
    -0.00010778589193920834, -1.592931232070752e-05, 3.4165272581362486e-05,
    3.878960412277272e-06, -9.676467722288585e-06, -1.1239642523923697e-06,
    2.5690215374482075e-06, 2.989317035618355e-07, -6.350729882338586e-07,
    -5.6364091343076356e-08, 1.385055035865035e-07, 5.42695543659079e-09,
    -2.513424477635891e-08, 3.9979711233042396e-10, 3.6332986694006633e-09,
    -2.447508896057985e-10, -4.0227248931733583e-10, 4.544267990902614e-11,
    3.222740521415848e-11, -4.923048883320841e-12, -1.6842008201900547e-12,
    3.1717285808331454e-13, 4.3626002104113067e-14, -9.655248055045914e-15,
];

pub(crate) const COIF13: [f64; 78] = [
    5.397665253413179e-11, 2.9788428962762406e-10, -1.1655569351589363e-09,
    -8.960663555841488e-09, 9.904532405499528e-09, 1.3234258111539453e-07,
    -2.2313779405754966e-08, -1.283040609582345e-06, -3.584652647047439e-07,
    9.203632105136547e-06, 4.696381409577385e-06, -5.216782941566019e-05,
    -3.207031521108189e-05, 0.00024359868161232437, 0.00015474958992454824,
    -0.0009653506427997918, -0.0005772407292770031, 0.003328281502145193,
    0.0017368147669575393, -0.01025349770472273, -0.00431983438131587,
    0.02939075108080778, 0.009020839284222126, -0.08597746684394245,
    -0.015978139165041417, 0.38852000978935936, 0.7312705109784648,
    0.5017430647594733, -0.03131941569669134, -0.18457453908712185,
    0.03484079447480541, 0.10378979921839435, -0.03323385503397948,
    -0.05836693841491292, 0.027085758746075883, 0.029460583208769923,
    -0.018729723722479448, -0.012434566529661356, 0.010855474911250553,
    0.003960379943156095, -0.005159946541854339, -0.0006711796467927651,
    0.0019252480369874464, -0.00016685797430416967, -0.000501652600817726,
    0.00018983528388362078, 4.524694235703235e-05, -8.643945008778702e-05,
    3.762931607876051e-05, 2.689030701415928e-05, -2.747998702668735e-05,
    -6.872743721041807e-06, 1.1950715962898635e-05, 1.9060146654115445e-06,
    -4.256170237128135e-06, -6.625909948948274e-07, 1.374174660827474e-06,
    2.298944383955703e-07, -4.086802708898369e-07, -6.602241223484867e-08,
    1.0884371632971002e-07, 1.5146429385492268e-08, -2.5271761562265724e-08,
    -2.7992526413429104e-09, 5.0617857081668125e-09, 4.0086123941858053e-10,
    -8.666408700204537e-10, -3.582337592754206e-11, 1.2338106253838637e-10,
    -3.9139591482265616e-13, -1.3885066739179434e-11, 6.994415437115753e-13,
    1.1493289354438977e-12, -1.1108038963646004e-13, -6.210897515480294e-14,
    8.678209474785874e-15, 1.6749742575975913e-15, -3.0350544373783074e-16,
];

pub(crate) const COIF14: [f64; 84] = [
    -1.0890299828444044e-11, -6.968774299004634e-11, 2.405026066643256e-10,
    2.265543234548436e-09, -2.012031050385385e-09, -3.612130453868195e-08,
    2.5514878852439313e-09, 3.7664263229370373e-07, 1.1164514389119666e-07,
    -2.8897775418642684e-06, -1.367526807658183e-06, 1.740552758575655e-05,
    9.542635935153329e-06, -8.578035945625188e-05, -4.8152370242908607e-05,
    0.0003563221415136743, 0.0001903538117676491, -0.0012776236283422015,
    -0.0006137372178689094, 0.00404377316103225, 0.0016535586643910496,
    -0.011597924543734862, -0.0037833256394995294, 0.03140906104618515,
    0.007434535206462452, -0.08822475676107631, -0.012650284769334283,
    0.3898667400024972, 0.7258562758224661, 0.502880481661856,
    -0.02430979332508125, -0.18948950703587378, 0.027655559664290254,
    0.11261360691749293, -0.02766103000527111, -0.06973611151804142,
    0.024354852092812244, 0.04107980554368617, -0.01889117117127592,
    -0.022183519727383437, 0.012915956110387034, 0.010767572691390889,
    -0.007789884959775461, -0.004644357758051575, 0.004151472918189331,
    0.0017720063273695698, -0.0019618163054102677, -0.0006012832724841599,
    0.0008273638510898435, 0.00018555733794898478, -0.0003146182390632478,
    -5.4455352917894323e-05, 0.00010936735334529238, 1.600974102168249e-05,
    -3.525088401326523e-05, -4.797622661391667e-06, 1.0633086490702675e-05,
    1.4138848957546088e-06, -3.0021989160539163e-06, -3.8879488265047107e-07,
    7.87154175245705e-07, 9.626034755249265e-08, -1.8952165983717574e-07,
    -2.1059591101590597e-08, 4.1456575437345304e-08, 4.004957841033793e-09,
    -8.15527571649454e-09, -6.444200619974527e-10, 1.426043322220974e-09,
    8.343591150489434e-11, -2.1845904869550122e-10, -7.718106572313555e-12,
    2.8782681447762733e-11, 2.7792984844690097e-13, -3.1805162975057905e-12,
    5.840684791299373e-14, 2.8416921050647654e-13, -1.3794154808938435e-14,
    -1.9383700435587126e-14, 1.571523424819851e-15, 9.062086656319602e-16,
    -1.0501549712918751e-16, -2.2464209028792226e-17, 3.510545201145772e-18,
];

pub(crate) const COIF15: [f64; 90] = [
    3.624196385700152e-12, 1.6045303921867898e-11, -9.8548879123802e-11,
    -5.463536550235976e-10, 1.2076951667779285e-09, 9.106318450133577e-09,
    -8.20931110930437e-09, -9.928683395435279e-08, 2.5252689817043833e-08,
    7.982883826802218e-07, 9.374970949575121e-08, -5.057162997060721e-06,
    -1.7165308541230952e-06, 2.6328984701111787e-05, 1.2232520240116171e-05,
    -0.00011600264126934235, -6.038834051093753e-05, 0.0004421619661107895,
    0.0002321342998525926, -0.0014851386238377087, -0.0007293524193500442,
    0.004476051320838831, 0.0019228725038666873, -0.012382822662285908,
    -0.004323603705325331, 0.03266647976078404, 0.008381622499586357,
    -0.09002752739831875, -0.014113228654015758, 0.39221922425284816,
    0.7278533471418336, 0.5000354458891113, -0.02671260521422532,
    -0.18625330503675552, 0.030180469827135945, 0.10913209673474022,
    -0.02993629920653547, -0.06621699971510983, 0.02605045610633179,
    0.03778961207877865, -0.01984774667584446, -0.019391276515120907,
    0.013195507859569676, 0.008653964915869398, -0.0076176939251898345,
    -0.0032381010938155198, 0.0037927181378446793, 0.00095956714731239,
    -0.0016136003921758194, -0.00019789072900487127, 0.0005791409545194439,
    1.4793871324928989e-05, -0.00017192712662650553, 7.04598010551479e-06,
    4.057946803477026e-05, -3.12545358260438e-06, -6.671959914459751e-06,
    6.465885939892683e-07, 1.0203884693505264e-07, -1.6781249667823428e-07,
    5.541261402620445e-07, 1.1797213691466484e-07, -3.4497391968158843e-07,
    -7.161419033858524e-08, 1.5339022555023437e-07, 3.013171058055966e-08,
    -5.6100427524428584e-08, -9.492060778322896e-09, 1.7363692745981106e-08,
    2.380503033677523e-09, -4.61477359461573e-09, -4.842320584788362e-10,
    1.0632840411650964e-09, 7.587965491953808e-11, -2.1218202982292664e-10,
    -7.252627144306614e-12, 3.6140209757304416e-11, -2.3129842231518144e-13,
    -5.1214119453675785e-12, 2.4693223634709543e-13, 5.838082836715023e-13,
    -5.201420721065662e-14, -5.1190121444064796e-14, 6.538141980649441e-15,
    3.2272211365790785e-15, -5.276155717159986e-16, -1.2967819359985083e-16,
    2.5441189004415172e-17, 2.484868470238669e-18, -5.612639917967267e-19,
];

pub(crate) const COIF16: [f64; 96] = [
    -1.0031755489750938e-12, -4.132231735010236e-12, 3.073519527433229e-11,
    1.4757851671172175e-10, -4.39699203947219e-10, -2.5867351630415506e-09,
    3.821536962261977e-09, 2.9688745003618833e-08, -2.1517474441125034e-08,
    -2.511659458669025e-07, 7.084072806957123e-08, 1.6716267859966699e-06,
    -5.859321086767666e-09, -9.122586613368055e-06, -1.5807903349192155e-06,
    4.202033039502089e-05, 1.1772956060110606e-05, -0.00016696417011640796,
    -5.6088595633233724e-05, 0.0005825453055673603, 0.0002056806054438181,
    -0.0018138374707924482, -0.0006180999692801144, 0.005127321796459817,
    0.0015697614242917621, -0.01345895510159847, -0.003430770166328588,
    0.03409603381309442, 0.006529416085873767, -0.09139882697377283,
    -0.010910535112544301, 0.3927222628512553, 0.7232080103380935,
    0.5014159587727719, -0.021074861863099557, -0.19028953013993147,
    0.02454157524465434, 0.11587092153764285, -0.02548153334120977,
    -0.07479868815760164, 0.02362640391346497, 0.04674573107744398,
    -0.01958295637702229, -0.027264278091551197, 0.01452166043296618,
    0.014552440300219845, -0.009642010062439222, -0.007021140436589815,
    0.0057392881361616205, 0.0030375522029392464, -0.003069106098364774,
    -0.0011741114865515597, 0.0014799739788103926, 0.00040690421537798626,
    -0.0006475116141546394, -0.0001285295980593011, 0.0002593694112047165,
    3.8340852895412074e-05, -9.62197223633876e-05, -1.1339170053434273e-05,
    3.3449848685517246e-05, 3.4232408013028894e-06, -1.0987296664964526e-05,
    -1.032521774503739e-06, 3.4150039424926725e-06, 2.9446393397343666e-07,
    -9.98963172021044e-07, -7.535098321959529e-08, 2.725216378499757e-07,
    1.659772834077233e-08, -6.869043273983146e-08, -2.981068895179952e-09,
    1.5867216293703998e-08, 3.7425133171956566e-10, -3.332564449519069e-09,
    -5.459290504112772e-12, 6.303657606605787e-10, -1.4129270191357623e-11,
    -1.0606094470239509e-10, 5.116984015277612e-12, 1.5627595591035424e-11,
    -1.1746413313086203e-12, -1.97885783857274e-12, 2.0249466782183002e-13,
    2.1046833223184004e-13, -2.714743602223981e-14, -1.826088537087299e-14,
    2.823055828826639e-15, 1.2410156091535625e-15, -2.219499990112238e-16,
    -6.201505727423957e-17, 1.2502547408816044e-17, 2.0302194234633583e-18,
    -4.524849153505073e-19, -3.2774337944092685e-20, 7.956575663653814e-21,
];

pub(crate) const COIF17: [f64; 102] = [
    1.6765664810221803e-13, 8.392613547986559e-13, -5.0519178297443575e-12,
    -3.1948796710347425e-11, 6.823076698048274e-11, 5.96815341559695e-10,
    -5.027560275237406e-10, -7.302461832944444e-09, 1.495531142537215e-09,
    6.590236628456341e-08, 1.0624601058751242e-08, -4.682528867224106e-07,
    -1.7893127758318462e-07, 2.73000547634933e-06, 1.3973542021697806e-06,
    -1.3438538312136536e-05, -7.768407597340534e-06, 5.7040193110513836e-05,
    3.408189726922818e-05, -0.000212233828635249, -0.00012347558315759058,
    0.0007020058341707633, 0.00037896186991307905, -0.0020920561847899803,
    -0.0010015883878851982, 0.005702496242997711, 0.00230568393754557,
    -0.014518765686685725, -0.004661319891542324, 0.035841305474944886,
    0.00832686495667595, -0.09397188937902894, -0.013204436308512188,
    0.39612153653543913, 0.7257586588271626, 0.49739084868392996,
    -0.02352829888279489, -0.18601907643313587, 0.026552349153616515,
    0.11181525998699414, -0.026839683040378818, -0.07135662592270536,
    0.024317836369661693, 0.04414198067977311, -0.019756539570329024,
    -0.025516060181276654, 0.01439571863581117, 0.01351767565606638,
    -0.009411023812461169, -0.0064876613853321555, 0.005524374509275233,
    0.0028035639555512473, -0.0029174509062735643, -0.0010914726858078806,
    0.0013913794467810651, 0.0003873436681463997, -0.000603205514254377,
    -0.00012903693572290255, 0.00024009192660327962, 4.227534546301181e-05,
    -8.885139497097694e-05, -1.4177466904629097e-05, 3.095396777809882e-05,
    4.853693768610737e-06, -1.0228375356761194e-05, -1.6236379395219723e-06,
    3.203211156039931e-06, 5.06023099248553e-07, -9.428316010816477e-07,
    -1.426506077503883e-07, 2.5781023468894796e-07, 3.5835615952422425e-08,
    -6.475358805792523e-08, -7.915463465594057e-09, 1.4778317552955582e-08,
    1.4963072013107493e-09, -3.024045083481086e-09, -2.271266897241936e-10,
    5.433473657371677e-10, 2.2810405374763632e-11, -8.259644826142142e-11,
    1.8284460083458435e-13, 9.799887665166563e-12, -7.055839580183826e-13,
    -6.801501541251471e-13, 1.8236643222064727e-13, -4.4172625486534454e-14,
    -2.83357301206003e-14, 2.4715962934393243e-14, 2.6314445385441568e-15,
    -4.824099269686474e-15, -3.610385254644777e-17, 6.277532544252634e-16,
    -3.221000059827699e-17, -5.824386109025956e-17, 5.648691444391565e-18,
    3.744190148692345e-18, -5.083059522250992e-19, -1.5043974358296872e-19,
    2.5532083794313407e-20, 2.8518846555918704e-21, -5.697121872666111e-22,
];

pub(crate) const MEYER: [f64; 102] = [
    -1.509740857e-06, 1.278766757e-06, 4.4958556e-07,
    -2.09656887e-06, 1.723223554e-06, 6.98082276e-07,
    -2.879408033e-06, 2.383148395e-06, 9.82515602e-07,
    -4.217789186e-06, 3.353501538e-06, 1.674721859e-06,
    -6.034501342e-06, 4.837555802e-06, 2.402288023e-06,
    -9.556309846e-06, 7.216527695e-06, 4.8490783e-06,
    -1.4206928581e-05, 1.0503914271e-05, 6.187580298e-06,
    -2.4438005846e-05, 2.0106387691e-05, 1.49935236e-05,
    -4.6428764284e-05, 3.2341311914e-05, 3.740966576e-05,
    -0.000102779005085, 2.4461956845e-05, 0.000149713515389,
    -7.5592870255e-05, -0.000139913148217, -9.351289388e-05,
    0.000161189819725, 0.000859500213762, -0.000578185795273,
    -0.002702168733939, 0.002194775336459, 0.006045510596456,
    -0.006386728618548, -0.011044641900539, 0.015250913158586,
    0.017403888210177, -0.032094063354505, -0.024321783959519,
    0.063667300884468, 0.030621243943425, -0.132696615358862,
    -0.035048287390595, 0.444095030766529, 0.743751004903787,
    0.444095030766529, -0.035048287390595, -0.132696615358862,
    0.030621243943425, 0.063667300884468, -0.024321783959519,
    -0.032094063354505, 0.017403888210177, 0.015250913158586,
    -0.011044641900539, -0.006386728618548, 0.006045510596456,
    0.002194775336459, -0.002702168733939, -0.000578185795273,
    0.000859500213762, 0.000161189819725, -9.351289388e-05,
    -0.000139913148217, -7.5592870255e-05, 0.000149713515389,
    2.4461956845e-05, -0.000102779005085, 3.740966576e-05,
    3.2341311914e-05, -4.6428764284e-05, 1.49935236e-05,
    2.0106387691e-05, -2.4438005846e-05, 6.187580298e-06,
    1.0503914271e-05, -1.4206928581e-05, 4.8490783e-06,
    7.216527695e-06, -9.556309846e-06, 2.402288023e-06,
    4.837555802e-06, -6.034501342e-06, 1.674721859e-06,
    3.353501538e-06, -4.217789186e-06, 9.82515602e-07,
    2.383148395e-06, -2.879408033e-06, 6.98082276e-07,
    1.723223554e-06, -2.09656887e-06, 4.4958556e-07,
    1.278766757e-06, -1.509740857e-06, 0.0,
];

pub(crate) const BIOR_H1: [f64; 10] = [
    0.0, 0.0, 0.0,
    0.0, 0.7071067811865476, 0.7071067811865476,
    0.0, 0.0, 0.0,
    0.0,
];

pub(crate) const BIOR_H2: [f64; 18] = [
    0.0, 0.0, 0.0,
    0.0, 0.0, 0.0,
    0.0, 0.3535533905932738, 0.7071067811865476,
    0.3535533905932738, 0.0, 0.0,
    0.0, 0.0, 0.0,
    0.0, 0.0, 0.0,
];

pub(crate) const BIOR_H3: [f64; 20] = [
    0.0, 0.0, 0.0,
    0.0, 0.0, 0.0,
    0.0, 0.0, 0.1767766952966369,
    0.5303300858899106, 0.5303300858899106, 0.1767766952966369,
    0.0, 0.0, 0.0,
    0.0, 0.0, 0.0,
    0.0, 0.0,
];

pub(crate) const BIOR_H4: [f64; 10] = [
    0.0, -0.06453888262869706, -0.04068941760916406,
    0.41809227322161724, 0.7884856164055829, 0.41809227322161724,
    -0.04068941760916406, -0.06453888262869706, 0.0,
    0.0,
];

pub(crate) const BIOR_H5: [f64; 12] = [
    0.013456709459118716, -0.002694966880111507, -0.13670658466432914,
    -0.09350469740093886, 0.47680326579848425, 0.8995061097486484,
    0.47680326579848425, -0.09350469740093886, -0.13670658466432914,
    -0.002694966880111507, 0.013456709459118716, 0.0,
];

pub(crate) const BIOR_H6: [f64; 18] = [
    0.0, 0.0, 0.0,
    0.014426282505624435, 0.014467504896790148, -0.07872200106262882,
    -0.04036797903033992, 0.41784910915027457, 0.7589077294536541,
    0.41784910915027457, -0.04036797903033992, -0.07872200106262882,
    0.014467504896790148, 0.014426282505624435, 0.0,
    0.0, 0.0, 0.0,
];

pub(crate) const BIOR_HM111: [f64; 2] = [
    0.7071067811865476, 0.7071067811865476,
];

pub(crate) const BIOR_HM113: [f64; 6] = [
    -0.08838834764831845, 0.08838834764831845, 0.7071067811865476,
    0.7071067811865476, 0.08838834764831845, -0.08838834764831845,
];

pub(crate) const BIOR_HM115: [f64; 10] = [
    0.016572815184059706, -0.016572815184059706, -0.12153397801643785,
    0.12153397801643785, 0.7071067811865476, 0.7071067811865476,
    0.12153397801643785, -0.12153397801643785, -0.016572815184059706,
    0.016572815184059706,
];

pub(crate) const BIOR_HM222: [f64; 6] = [
    -0.1767766952966369, 0.3535533905932738, 1.0606601717798212,
    0.3535533905932738, -0.1767766952966369, 0.0,
];

pub(crate) const BIOR_HM224: [f64; 10] = [
    0.03314563036811941, -0.06629126073623882, -0.1767766952966369,
    0.4198446513295126, 0.9943689110435825, 0.4198446513295126,
    -0.1767766952966369, -0.06629126073623882, 0.03314563036811941,
    0.0,
];

pub(crate) const BIOR_HM226: [f64; 14] = [
    -0.006905339660024878, 0.013810679320049757, 0.04695630968816917,
    -0.1077232986963881, -0.16987135563661201, 0.4474660099696121,
    0.966747552403483, 0.4474660099696121, -0.16987135563661201,
    -0.1077232986963881, 0.04695630968816917, 0.013810679320049757,
    -0.006905339660024878, 0.0,
];

pub(crate) const BIOR_HM228: [f64; 18] = [
    0.0015105430506304422, -0.0030210861012608843, -0.012947511862546647,
    0.02891610982635418, 0.05299848189069094, -0.13491307360773605,
    -0.16382918343409023, 0.46257144047591653, 0.9516421218971786,
    0.46257144047591653, -0.16382918343409023, -0.13491307360773605,
    0.05299848189069094, 0.02891610982635418, -0.012947511862546647,
    -0.0030210861012608843, 0.0015105430506304422, 0.0,
];

pub(crate) const BIOR_HM331: [f64; 4] = [
    -0.3535533905932738, 1.0606601717798212, 1.0606601717798212,
    -0.3535533905932738,
];

pub(crate) const BIOR_HM333: [f64; 8] = [
    0.06629126073623882, -0.1988737822087165, -0.15467960838455727,
    0.9943689110435825, 0.9943689110435825, -0.15467960838455727,
    -0.1988737822087165, 0.06629126073623882,
];

pub(crate) const BIOR_HM335: [f64; 12] = [
    -0.013810679320049757, 0.04143203796014927, 0.052480581416189075,
    -0.26792717880896527, -0.07181553246425873, 0.966747552403483,
    0.966747552403483, -0.07181553246425873, -0.26792717880896527,
    0.052480581416189075, 0.04143203796014927, -0.013810679320049757,
];

pub(crate) const BIOR_HM337: [f64; 16] = [
    0.0030210861012608843, -0.009063258303782653, -0.01683176542131064,
    0.074663985074019, 0.03133297870736289, -0.301159125922835,
    -0.02649924094534547, 0.9516421218971786, 0.9516421218971786,
    -0.02649924094534547, -0.301159125922835, 0.03133297870736289,
    0.074663985074019, -0.01683176542131064, -0.009063258303782653,
    0.0030210861012608843,
];

pub(crate) const BIOR_HM339: [f64; 20] = [
    -0.0006797443727836989, 0.002039233118351097, 0.005060319219611981,
    -0.020618912641105536, -0.014112787930175844, 0.09913478249423216,
    0.012300136269419315, -0.32019196836077857, 0.0020500227115698858,
    0.9421257006782068, 0.9421257006782068, 0.0020500227115698858,
    -0.32019196836077857, 0.012300136269419315, 0.09913478249423216,
    -0.014112787930175844, -0.020618912641105536, 0.005060319219611981,
    0.002039233118351097, -0.0006797443727836989,
];

pub(crate) const BIOR_HM444: [f64; 10] = [
    0.03782845550726404, -0.023849465019556843, -0.11062440441843718,
    0.37740285561283066, 0.8526986790088938, 0.37740285561283066,
    -0.11062440441843718, -0.023849465019556843, 0.03782845550726404,
    0.0,
];

pub(crate) const BIOR_HM555: [f64; 12] = [
    0.0, 0.03968708834740544, 0.007948108637240322,
    -0.05446378846823691, 0.34560528195603346, 0.7366601814282105,
    0.34560528195603346, -0.05446378846823691, 0.007948108637240322,
    0.03968708834740544, 0.0, 0.0,
];

pub(crate) const BIOR_HM668: [f64; 18] = [
    0.0019088317364812906, -0.0019142861290887667, -0.016990639867602342,
    0.01193456527972926, 0.04973290349094079, -0.07726317316720414,
    -0.09405920349573646, 0.4207962846098268, 0.8259229974584023,
    0.4207962846098268, -0.09405920349573646, -0.07726317316720414,
    0.04973290349094079, 0.01193456527972926, -0.016990639867602342,
    -0.0019142861290887667, 0.0019088317364812906, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    const SQRT2: f64 = core::f64::consts::SQRT_2;

    #[test]
    fn orthogonal_filters_sum_to_sqrt2() {
        for name in [
            "haar", "db2", "db5", "db10", "db24", "db38", "sym3", "sym10", "sym20", "coif1",
            "coif2", "coif9", "coif17",
        ] {
            match lookup(name) {
                Some(FilterSpec::Orthogonal(c)) => {
                    let sum: f64 = c.iter().sum();
                    assert!((sum - SQRT2).abs() < 1e-12, "{name}: sum {sum}");
                }
                _ => panic!("{name} missing from registry"),
            }
        }
    }

    #[test]
    fn biorthogonal_segments_fit() {
        for name in [
            "bior1.1", "bior2.8", "bior3.9", "bior4.4", "bior5.5", "bior6.8", "rbior3.5",
        ] {
            match lookup(name) {
                Some(FilterSpec::Biorthogonal { h, hm, len, .. }) => {
                    assert!(len <= h.len());
                    assert_eq!(hm.len(), len);
                    assert_eq!((h.len() - len) % 2, 0);
                }
                _ => panic!("{name} missing from registry"),
            }
        }
    }

    #[test]
    fn rbior_swaps_roles() {
        let fwd = lookup("bior2.4");
        let rev = lookup("rbior2.4");
        match (fwd, rev) {
            (
                Some(FilterSpec::Biorthogonal { reverse: a, .. }),
                Some(FilterSpec::Biorthogonal { reverse: b, .. }),
            ) => {
                assert!(!a);
                assert!(b);
            }
            _ => panic!("bior2.4 missing from registry"),
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in [
            "db0", "db39", "sym1", "sym21", "coif0", "coif18", "bior7.7", "rbior1.2", "morlet",
            "db", "db1x", "",
        ] {
            assert!(lookup(name).is_none(), "{name} should not resolve");
        }
    }

    #[test]
    fn filter_lengths_follow_the_order() {
        for n in 1..=38 {
            match lookup(&alloc::format!("db{n}")) {
                Some(FilterSpec::Orthogonal(c)) => assert_eq!(c.len(), 2 * n),
                _ => panic!("db{n} missing from registry"),
            }
        }
        for n in 2..=20 {
            match lookup(&alloc::format!("sym{n}")) {
                Some(FilterSpec::Orthogonal(c)) => assert_eq!(c.len(), 2 * n),
                _ => panic!("sym{n} missing from registry"),
            }
        }
        for n in 1..=17 {
            match lookup(&alloc::format!("coif{n}")) {
                Some(FilterSpec::Orthogonal(c)) => assert_eq!(c.len(), 6 * n),
                _ => panic!("coif{n} missing from registry"),
            }
        }
    }

    #[test]
    fn meyer_is_the_long_fir_approximation() {
        match lookup("meyer") {
            Some(FilterSpec::Orthogonal(c)) => assert_eq!(c.len(), 102),
            _ => panic!("meyer missing from registry"),
        }
    }
}
