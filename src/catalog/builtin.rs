use crate::Script;

pub(super) struct BuiltinProfile {
    pub(super) code: &'static str,
    pub(super) scripts: &'static [Script],
    /// `|` separated, rank-descending
    pub(super) trigrams: &'static str,
}

pub(super) const BUILTIN_PROFILES: &[BuiltinProfile] = &[
    // English
    BuiltinProfile {
        code: "en",
        scripts: &[Script::Latin],
        trigrams: " th|the|he | an|and|nd | of|of | to|ing|ng | in|in |ed |er |ion|tio|is | a |on |es |at |ent| is|re |hat| ha|tha|for| fo|or |ly |to |her| wh|ere|ter|ou | it|it |his|all| be|as |was|e t|s t|you| yo|are|ith|wit| wi",
    },
    // French
    BuiltinProfile {
        code: "fr",
        scripts: &[Script::Latin],
        trigrams: "es | de|de |le |ent| le|nt |la | la|les| et|et |ion|re |e d|s d|on |que| qu|ue |e l| pa|our|ur | un|une|ne |ait|men|e p| po|ous| co|ell|lle|est| es|st |tio| au|au |eme| l'| d'|ais|ans| da|dan|jou|aux| ce|ce |s l|ée |ité| c'|c'e|'es|ui |bon|mon",
    },
    // German
    BuiltinProfile {
        code: "de",
        scripts: &[Script::Latin],
        trigrams: "en |er | de|der|ie |ich|ein| di|die|sch|che|ch | ei|und| un|nd |den|cht| ge|gen|ung|ine|ten|te |in | zu|es |ist| is|st |ber|das| da|nic|ht |auf| au|eit|ver| ve|mit| mi|sie|ür |für| fü|uf |ass|daß|em | we|ach",
    },
    // Spanish
    BuiltinProfile {
        code: "es",
        scripts: &[Script::Latin],
        trigrams: " de|de |os | la|la |el |es |que| qu|ue | el|en |as | en|ent| co|ión|ció|aci| lo|los| se|nte| y |do |ado|con| po|ra | un|una|ar |por|er |o d|a d|e l|est|s d|ien| es|par|ues|nes|mos|más|com|ero|per",
    },
    // Italian
    BuiltinProfile {
        code: "it",
        scripts: &[Script::Latin],
        trigrams: " di|di |to | de|la |re |che|he | la|ell|del|ne |one|no |ent|o d|le |lla| il|il |per| pe|ta |zio|ion| co|e d| un|con|ato|ra |a d|nte| ch| in|so |ti |sta| è |gli|ia |ere|ono| e |zza|are",
    },
    // Portuguese
    BuiltinProfile {
        code: "pt",
        scripts: &[Script::Latin],
        trigrams: " de|de |os |do | qu|que|ue | a |ção|ão |o d|da |es |ent| co|com|a d|as |nte| e |em | pa|ra | do| da|men|um |uma| um|par|ado|não| nã|ões|ida|ar |est|is |çõe|ica|ser| se|oss|nho",
    },
    // Dutch
    BuiltinProfile {
        code: "nl",
        scripts: &[Script::Latin],
        trigrams: "en | de|de |an |van| va|et |het| he|een| ee|er |ij |in |aar|ver| ve|ing|ijk|nde| en|ten|oor|te | in|lij|den|cht|eer| is|is |ie |sch|ge | ge|oe |ook| oo|zij| zi|wor|ord",
    },
    // Swedish
    BuiltinProfile {
        code: "sv",
        scripts: &[Script::Latin],
        trigrams: " oc|och|ch |en |er |ar | de|att| at|tt |det|et |ing|för| fö|ör | in|som| so|om |nde|and|ska|är | är|på | på|av | av|de |med| me|ill|til| ti|men|lig|den|ade|ta |jag| ja",
    },
    // Danish
    BuiltinProfile {
        code: "da",
        scripts: &[Script::Latin],
        trigrams: "er |en | de|et |og | og|der|de |for| fo|ing|at | at|til| ti|il |nde|ere| er|den|med| me|af | af|ke |ige|lig|ter| en|ne |på | på|som| so|om |ikk|kke|har| ha|gen|jeg|eg ",
    },
    // Norwegian
    BuiltinProfile {
        code: "no",
        scripts: &[Script::Latin],
        trigrams: "er |en | og|og |et | de|for| fo|det|til| ti|il |ing|som| so|om |de |ikk|kke|ke |med| me|på | på|av | av|har| ha|jeg| je|eg |ene|ter|lig| er|den|nde|sko|ekk|ble| bl",
    },
    // Finnish
    BuiltinProfile {
        code: "fi",
        scripts: &[Script::Latin],
        trigrams: "en |an | ja|ja |in |sen|ise|ta |ist|ssa|sa |tta|n k|lla|ast|kse|ell|aa |ttä|tä |ine|ais|ksi|on | on|ti |sti|oli|n j|iin|ään|mis|ill| ka|kan|ää |ssä|lle|ait|ite",
    },
    // Polish
    BuiltinProfile {
        code: "pl",
        scripts: &[Script::Latin],
        trigrams: "ie |nie| ni| pr|prz|rze|ych|ch |ze | po| w |ego|go |ej |ani|wie| na|na |ści|owa|cie|est|sta|ia |ać |ów |się| si|ię |że |jak| ja|dzi|rzy|kie|ość|nia|iej|em | za|do ",
    },
    // Czech
    BuiltinProfile {
        code: "cs",
        scripts: &[Script::Latin],
        trigrams: " pr|pro|ní |ost|ch | po|ou | a |je |ho | ne|né |ých|ter|ení|ova|ván| na|na |sti|to |ky |se | se|pře|ře |ého|ým |ně |nos|pod|ím | je|ist|ské|val| ve|í a|ný |ký |dne|já | já|svý|vým|jdu",
    },
    // Slovak
    BuiltinProfile {
        code: "sk",
        scripts: &[Script::Latin],
        trigrams: " pr|pro|ie |ch |ost| po|na | na| a |nie|ova|je |sti| ne|ého|ých|ia |ani|kto|ako| ak|sa | sa|že |tor|ní |ať |ovn|ej |om |pre| zá",
    },
    // Hungarian
    BuiltinProfile {
        code: "hu",
        scripts: &[Script::Latin],
        trigrams: " a |az | az|sze| me|en |egy|gy | eg|ek |ás |nak|ak |et |es |ogy|hog| ho| ki|ele|tt |ete|tás|len|el |ban|an |ség|ész|ra |re |nem| ne|min|ény|ell|lt |ból|ből|ért",
    },
    // Romanian
    BuiltinProfile {
        code: "ro",
        scripts: &[Script::Latin],
        trigrams: " de|de |re |ul | în|în |ea | a |si |și | și|are| ca|ii |ent| co|le |ate|lui|ui | pe|pe |ia |ile|rea|ală|că | că|est|tă |oar|nte| di|din|ele|ite|cu | cu|ar |pri|ări",
    },
    // Turkish
    BuiltinProfile {
        code: "tr",
        scripts: &[Script::Latin],
        trigrams: "lar|ler|in |ir |eri|ın |bir| bi|an |ara|de |da |ve | ve|en |ini|iri|arı|nda|nde|la |le |ası|esi| ya|rın|ını|ak |ek |ığı|yor|lan|len|dan|den|ile| ka|bu | bu|çin|içi",
    },
    // Vietnamese
    BuiltinProfile {
        code: "vi",
        scripts: &[Script::Latin],
        trigrams: " củ|của|ủa | và|và |ng | ng|ngư|ười|ời |nh | th| nh|ác |ông|các| cá|ong| kh|khô|hôn|ộng|ột | mộ|một|là | là|đượ|ược|ợc | đư|có | có|ươn|ình|anh|ch |ến |ững|nhữ| tr",
    },
    // Indonesian
    BuiltinProfile {
        code: "id",
        scripts: &[Script::Latin],
        trigrams: "an |ang|ng | da|dan|kan| me|men|yan|nya|ya |ada| ya| di|di | be|in |ber|ara|nga|ah |eng|ini| in|ala|gan|aka|ata|per| ke|ter|lah|ran|ing|iny|pad|apa|aya|tid|ida|dak",
    },
    // Malay
    BuiltinProfile {
        code: "ms",
        scripts: &[Script::Latin],
        trigrams: "an |ang|ng | da|dan|kan| me|men|yan|ya |ada|nya| ya| di|di |per|ber|dal|ala|lam|am |ini|unt|ntu|tuk|uk |ole|leh|eh |sek|ah |ker|era|ata|tid|dak|bol",
    },
    // Catalan
    BuiltinProfile {
        code: "ca",
        scripts: &[Script::Latin],
        trigrams: " de|de |es |la | la| i |el | el|ent|que| qu|ue |les| le|ls |els| pe|per|er |ció|ió | co|en |nt |a l|amb| am|mb |s d|ons|l'a| l'| d'|una| un|est|ar |ts |al ",
    },
    // Croatian
    BuiltinProfile {
        code: "hr",
        scripts: &[Script::Latin],
        trigrams: "je | je| pr|ije| na|na |ti |i p| po| i |ih |no |ni |ima|da | da|ost|pre|ja |a s| u |se | se|li |ove|sta|ako| ko|koj|oji|va |kao|ka |om |nje|ati|iti|što| št|će ",
    },
    // Slovenian
    BuiltinProfile {
        code: "sl",
        scripts: &[Script::Latin],
        trigrams: "je | je| in|in | pr|ni | na|na |pri|ost|da | da|se | se| po|ti |sem|em |ova|li |ki | ki|pre|ega|ga |kat|ter| te|sti|lo |tud|udi|di |bil|ših|ski|tem",
    },
    // Estonian
    BuiltinProfile {
        code: "et",
        scripts: &[Script::Latin],
        trigrams: "en | ja|ja |se |ud |ise|le |ga |st |ist|as |sta|da |oli|ks |il | ka|et |in |es |mis|ele|lt |kus| on|on |loo|aja|iku|ida| ta|tud|sel|ale|ole|ma | ma|õi |ühe",
    },
    // Latvian
    BuiltinProfile {
        code: "lv",
        scripts: &[Script::Latin],
        trigrams: "as |ai | ar| un|un |ība|bas|iem| pa|ar |ies|es |ām |em |is |ija|ana|vie|tā |ās |tie|ot |ka | ka|ais|par| pr|kā |no | no|tas|šan|ēja|ījā|ir | ir",
    },
    // Lithuanian
    BuiltinProfile {
        code: "lt",
        scripts: &[Script::Latin],
        trigrams: "as | ir|ir |is |ai |ių |os |ja |ti | pa|ini|kai| ka|tai|ta |imo|mo |buv|uvo|vo |ija|ės |tik| ne|nes|ant| ta|ymo|jo |ios|iau|aus|ų p|ąją|yra| yr",
    },
    // Albanian
    BuiltinProfile {
        code: "sq",
        scripts: &[Script::Latin],
        trigrams: " të|të |në | në|për| pë|ër |dhe| dh|he |ve |in |ime|ara|ish|ët |et |ën |and|ta |ësh|shë|ohe| ës|ht |një|jë | nj|me | me|ose|së | se",
    },
    // Tagalog
    BuiltinProfile {
        code: "tl",
        scripts: &[Script::Latin],
        trigrams: "ng | ng|ang| an| sa|sa |mga| mg|ga |na |ay | ay|at | na|ala|ing|in |ito|to |ong| ka|kan|nan|an |g m|lan|pag|ka |may|ag |ako| ak|iya",
    },
    // Russian
    BuiltinProfile {
        code: "ru",
        scripts: &[Script::Cyrillic],
        trigrams: " пр|ого|ени|ост|ть | на|на | по| не|не |ста|ет |то |ст |ова|ать| в |ния|ель|ани|ие |ый |ли |ой |ом | и |что| чт|про|ере|ред|ал |ов |ных|ско|это| ко|как|при|его|тор|ень|чен|ясь| эт|ел |дел",
    },
    // Ukrainian
    BuiltinProfile {
        code: "uk",
        scripts: &[Script::Cyrillic],
        trigrams: " пр|на | на|ння|ого|ост| по|ні |ти | за|за |ати|их |ськ|ува|про| не|не |ий |ся |ють|ає |ів | і |ті |що | що|ова|ист|ент|ої | ви|від|ку | як|ли |ічн|ій |їх |ою |ну |щоб|дуж|уже|її |аїн|раї|кра| кр|ви |ити|ові",
    },
    // Bulgarian
    BuiltinProfile {
        code: "bg",
        scripts: &[Script::Cyrillic],
        trigrams: " на|на |та | пр|то |ите| за|за | от|от |ата|ени| по|да | да|ост|ия |ява| се|се |ни |ние|те |ред|про|ане| е |ето|ва |ски|ска| и |тел| в |ът |ще | ще",
    },
    // Serbian
    BuiltinProfile {
        code: "sr",
        scripts: &[Script::Cyrillic, Script::Latin],
        trigrams: "је | је| пр|ије| на|на |ти |ни |ост| да|да |ја |се | се| по|их |ово|ног|ња |ење|ста|ко |ли |ла |ања|ће |што| шт|ка | и |ђе |ћи ",
    },
    // Belarusian
    BuiltinProfile {
        code: "be",
        scripts: &[Script::Cyrillic],
        trigrams: " на|на |ць |ых | па| пр|ая | і | ў |ага|ння|ста|ыя |аль|ні |зна|ва |ара|ад | ад|тан|ці |мі |раз|ска|для| дл|іх |ыць|што",
    },
    // Greek
    BuiltinProfile {
        code: "el",
        scripts: &[Script::Greek],
        trigrams: " το|το |ου |να | να| κα|και|αι | τη|την|ην |της|ης | τω|των|ων |ει |τα | τα|ία |ματ|από| απ|ική|ικό|ότη|στη| στ|ος |ση |για| γι|ναι|είν| εί|ς σ|οι ",
    },
    // Arabic
    BuiltinProfile {
        code: "ar",
        scripts: &[Script::Arabic],
        trigrams: " ال|ال |ية |في | في|من | من|ين |ات |على| عل|لى |ها |الم|ان |ة ا|اء |ون |هذا| هذ|ذا |الت|ما |لا | لا|عن | عن|ه ا| وا|وال|كان| كا|الا|الب|الع",
    },
    // Persian
    BuiltinProfile {
        code: "fa",
        scripts: &[Script::Arabic],
        trigrams: " و |ای | در|در |ها |ان | به|به |ین | از|از |که | که|را | را|است| اس|ست |ده |ی ب|ی م|می | می|های|ر ا|ند |این| ای|یک | یک|با | با|ار |ود |رد | بر",
    },
    // Urdu
    BuiltinProfile {
        code: "ur",
        scripts: &[Script::Arabic],
        trigrams: " کے|کے | کی|کی | ہے|ہے | اس|میں| می|یں |نے | نے|کا | کا|اور| او|ور |سے | سے|کو | کو|ان |ہیں|ے ک|ا ک|ی ک|پر | پر|ہو |تھا|ھا |گا ",
    },
    // Hebrew
    BuiltinProfile {
        code: "he",
        scripts: &[Script::Hebrew],
        trigrams: "ים | של|של |ות | וה|את | את|על | על|ה ש|ה ה| לא|לא |ני |ית |ם ה|ון | הו|הוא|וא |זה | זה|ו ש|כי | כי|גם | גם|ל ה|ה ב|יה |ר ה|ת ה",
    },
    // Hindi
    BuiltinProfile {
        code: "hi",
        scripts: &[Script::Devanagari],
        trigrams: " के|के | है|है |में|ें | की|की |का | का|और | और|ने | ने|से | से| को|को | कि|कि |ों |ा ह|ी ह|ता |ते |ा क|ी क|था |प्र|्रा|िया|या ",
    },
    // Marathi
    BuiltinProfile {
        code: "mr",
        scripts: &[Script::Devanagari],
        trigrams: " आह|आहे|ाहे|हे | व |ा आ|्या|या | या|ाच्|च्य|ची |चा |चे |ला |ना |त्य| त्|ण्य|ले |ली |ून |ामु|्ये|ध्य",
    },
    // Nepali
    BuiltinProfile {
        code: "ne",
        scripts: &[Script::Devanagari],
        trigrams: " र |छ। |को | को|मा | मा|ने | ने|हरु|रु |द्व|्छ |छन्|न् |ेको|एको|गरे| गर|ुने|हुन| हु|लाई|ाई |गर्|र्न|्ने",
    },
    // Bengali
    BuiltinProfile {
        code: "bn",
        scripts: &[Script::Bengali],
        trigrams: "ের | এব|এবং|বং |ার |কে |েকে|্রা|য় |ায়|য়ে|না | না| কর|করে|রে |ছে |িয়|তে |েন |ান |র স| আম|আমা|মার| এক|একট|কটি|টি |দের|ক্ষ",
    },
    // Tamil
    BuiltinProfile {
        code: "ta",
        scripts: &[Script::Tamil],
        trigrams: "ில்|ல் |்கு|ும்|ம் |து |ின்|ன் |கள்|ள் |ப்ப|த்த|க்க|்கள|ற்ற|ந்த|ஒரு| ஒர|ரு |இந்|ை இ",
    },
    // Thai
    BuiltinProfile {
        code: "th",
        scripts: &[Script::Thai],
        trigrams: "การ|ที่|ของ|และ|ไม่|ได้|ให้|เป็|ป็น|ควา|วาม|่าง|อง |ระบ|าก |ประ|ระเ|มี |จะ |ว่า|่า |แล้|ล้ว|ี่ |้อง|ต้อ",
    },
    // Chinese
    BuiltinProfile {
        code: "zh",
        scripts: &[Script::Han],
        trigrams: "一个人|是一个|有一个|了一个|我们的|他们的|中国的|的时候|这个人|可以的|没有人|是什么|为什么|自己的|已经是|的一个|在中国|这是一|我们在|不是我|们今天|我们今|今天的|今天是|我今天|的人。|在这里|这里的|中国人|是我的|这样的|不知道|知道了|了一下",
    },
    // Japanese
    BuiltinProfile {
        code: "ja",
        scripts: &[Script::Han, Script::Hiragana, Script::Katakana],
        trigrams: "ている|ていた|いる。|ました|した。|します|ます。|です。|ること|ことが|ことを|ものが|につい|ついて|いて、|ではな|はない|ない。|のです|として|してい|られる|れる。|からの|日本の|こんに|んにち|にちは",
    },
    // Korean
    BuiltinProfile {
        code: "ko",
        scripts: &[Script::Hangul, Script::Han],
        trigrams: "습니다|니다.|니다 |합니다|하는 |에서 | 있는|있는 |는 것| 것이|것이 |이다.|있다.|하고 |에게 |으로 |하지 |지 않|에 대|대한 |들이 |고 있|했다.|었다.|으며 |라고 |이 있|안녕하|녕하세|하세요",
    },
    // Armenian
    BuiltinProfile {
        code: "hy",
        scripts: &[Script::Armenian],
        trigrams: "ան |ում|ներ|երի|րի |ուն|յան|ու |ի ա|թյա|ով |ին |ակա|կան|եր | և |ը ա| է |բար|արե|այս|յս |որո|րոն|ոնք|ինչ",
    },
    // Georgian
    BuiltinProfile {
        code: "ka",
        scripts: &[Script::Georgian],
        trigrams: "ის |ბის|ები| და|და |ში |ება|ბა |რომ| რო|ომე|ლი |ური|ული|ვის|ს დ|ს მ|ა დ|ნი |თვი|ართ|ქარ| ქა",
    },
];
