//! Channel-specific style exemplars.
//!
//! These are curated samples of prior content, used in prompts as STYLE and
//! STRUCTURE references only — never as factual source material. Factual
//! content must come from brand guidelines and retrieved chunks.

use crate::compose::Channel;

static LINKEDIN_EXEMPLARS: [&str; 3] = [
    r#"LinkedIn post 1:
//Fra PDF til IXBRL – ét regnskab, én sandhed
Vi er så småt begyndt at sige farvel til PDF + XBRL og goddag til IXBRL i Digital Revisors værktøj.
Indrømmet! Det er måske lidt nørdet, men i vores branche er det en elegant løsning på et problem, som mange har kæmpet med i årevis.
Når selskaber og revisorer indberetter årsrapporten til Danish Business Authority, har det nemlig været nødvendigt at indsende to filer – én til mennesker og én til maskiner. Det åbnede desværre op for fejl, forkerte versioner og forskellige tal alt efter, hvor man kiggede.

Nu bliver det enkelt. IXBRL samler det hele i én fil. Én fil = én sandhed. En IXBRL-fil kan både læses af computere og af mennesker – og det er præcis det, Erhvervsstyrelsen nu kræver.

Hos Digital Revisor er de første årsrapporter i det nye format indberettet til Erhvervsstyrelsen, og vi glæder os til at udforske mulighederne endnu mere – og få kigget nogle af udfordringerne efter i sømmene!

hashtag#IXBRL hashtag#Regnskab hashtag#Digitalisering hashtag#Gennemsigtighed hashtag#Govtech"#,
    r#"LinkedIn post 2:
Der var både varme i luften og i dialogen, da vi forleden gæstede Vommevad Forsamlingshus i Regstrup.😊

Her samlede Dennis Malle sin erfagruppe af FDR-medlemmer til en eftermiddag, hvor vi talte om alt fra årsrapporter og dokumentation til ESG og iXBRL.
Stemningen var præget af nysgerrighed og lyst til erfaringsdeling.

Vi fik en udbytterig eftermiddag med dialoger om digitalisering af årsrapporter, ESG-rapportering og iXBRL, ikke som fjerne buzzwords, men som reelle løsninger, der frigør tid og ressourcer i hverdagen.

Det var inspirerende at høre medlemmernes forskellige erfaringer, både fra gamle dage og ideer til morgendagen.
Tak til Dennis for invitationen. ☀️

Er du selv med i en erfa-gruppe eller et netværk, der er nysgerrige på digitalisering, iXBRL eller ESG? Så tager vi meget gerne turen ud til jer og åbner dialogen.

hashtag#revisor hashtag#digitalisering hashtag#ESG hashtag#iXBRL hashtag#erfagruppe hashtag#videndeling hashtag#bogholder"#,
    r#"LinkedIn post 3:
Vi har denne uge afholdt to stærke kursusdage med skarpe og engagerede fagfolk i Sabro og Ringsted 😊💡35 bogholdere og revisorer var med til vores allerførste fysiske kurser, hvor Digital Revisors værktøj var omdrejningspunktet.

Alexander Bojesen og Mads Poulsen satte fokus på praktisk anvendelighed, og hvordan værktøjet kan understøtte rådgivernes arbejde med årsrapporter og skattemæssige opgaver. Der blev dykket ned i skatteordninger, cases, vist tidsbesparende tricks og skabt rum for netværk på tværs.💬

Tak til alle jer, der deltog og bidrog med viden, spørgsmål og god energi. Det er præcis jer, der er med til at gøre Digital Revisor endnu bedre 👌"#,
];

static FACEBOOK_EXEMPLARS: [&str; 3] = [
    r#"Facebook post 1:
De her dage starter mange tusinde unge på studie og der er tryk på boligmarkedet, når de unge skal finde deres nye hjem.​​🏠👩‍🎓
Er du forældre til en ung på boligjagt? Og har I, eller overvejer I, at lave et forældrekøb? Så læs med her - der er nemlig et par ting i skal være opmærksomme på ift økonomi og Skat.
Selvom du udlejer til en nærtstående part (dit barn), opfatter Skat dig nu som erhvervsdrivende, og du skal derfor:
- Sætte huslejen efter markedsleje
- Huske en lejekontrakt
- Udarbejde skatteregnskab
- Udfylde oplysningsskema
- Og vælge en skatteordning (VSO, kapitalafkast eller alm. beskatning)
Tag et kig på blogindlægget og undgå skatteforvirring som forældrekøber:"#,
    r#"Facebook post 2:
Har du fået styr på Skat og årsregnskabet for 2024? Langt de fleste revisorer har lukket for denne regnskabsperiode og med kun én uge til fristen for boligudlejere og personligt ejede virksomheder, er det ved at være sidste chance 🫡
Heldigvis får du den hurtigste hjælp til skat og indberetning hos Digital Revisor - både aftener og weekender, så du kan komme sikkert i mål, når det passer dig!
Prøv gratis i dag. Opret din bruger her: https://app.digitalrevisor.nu/register/"#,
    r#"Facebook post 3:
Der er nu under en måned til vi rammer indberetningsfristen for boligudlejere, enkeltmandsvirksomheder og I/S! Den 1. juli skal du nemlig have fået styr på regnskabet for 2024 og indberettet det hele til Skat👨‍💻
Vi sidder, som sædvanligt, klar til at hjælpe dig hurtigt og sikkert igennem, så du kan gå sommeren i møde med ét vigtigt punkt mindre på den to-do liste, der har en tendens til at være liiidt lang før en velfortjent ferie.
Har du allerede klaret indberetningen??🌞"#,
];

static NEWSLETTER_EXEMPLARS: [&str; 3] = [
    r#"Newsletter 1:
Fra 2025 skal årsrapporter indberettes i iXBRL-format efter krav fra Erhvervsstyrelsen.

Det betyder, at årsrapporten ikke længere ligner de velkendte PDF’er. Det får vi mange spørgsmål om, og det forstår vi godt.

Det nye format er en omkalfatring og tvinger os alle i at tænke i nye baner.

Ændringen er ikke vores, men kommer fra myndighederne, og vores opgave, som din leverandør, er at sikre, at du fortsat lever op til loven og stadig kan præsentere et professionelt resultat til dine kunder.

I dagens nyhedsbrev kan du læse mere om, hvorfor det ændrer årsrapporten, og hvad det kommer til at betyde for dig.

Derudover vil vi også løfte sløret for, hvilke fantastisk flotte årsrapporter, du kan danne til dine kunder i nærmeste fremtid med Digital Revisor.

De største ændringer i årsrapporten, som det ser ud lige nu
iXBRL er teknisk set en hjemmeside. Derfor kan vi ikke længere få en PDF-læser til at åbne årsrapporten. I stedet bliver filen et link, der åbnes i din browser, ligesom når du besøger din favorit-nyhedsside.

Det giver følgende ændringer:

PDF-formatet overtages af et liggende format. I dette format tilpasses siden efter teksten. Dermed vil der ikke længere være store felter uden fyld, som vi ser i PDF-formater.
Du har dog stadig mulighed for at printe en PDF-version, der næsten ligner den, du er vant til.
Indholdsfortegnelsen bliver klikbar, så du i stedet for at bladre kan klikke dig direkte hen til det punkt i årsrapporten, du ønsker at se. Ligesom på en almindelig hjemmeside.
Hvordan bliver årsrapporten i fremtiden?
Vi arbejder ihærdigt på at lave en helt ny årsrapport, der bliver visuelt flottere og mere tiltalende for dine kunder. iXBRL giver os nemlig mulighed for at lave årsrapporter med fængende opsætning og billeder i stil med årsrapporter fra Lego og Grundfos uden at det skal tage flere timer.

Det er vi lige nu i gang med at udvikle, og vi glæder os til, at vi kan vise dig, hvordan det kommer til at se ud, når du afleverer årsrapporter til dine kunder, som er lavet i Digital Revisor i nærmeste fremtid.

Hvad er fordelene ved iXBRL?
Vi forstår godt, at den iXBRL-fil, vi danner lige nu, ser mærkelig ud sammenlignet med den, du har været vant til i mange år. Udviklingen, formatet og Erhvervsstyrelsens iXBRL-standard har tvunget os til at lade det se ud, som det gør nu.

Derfor befinder vi os i en overgangsfase, men iXBRL vil åbne en række nye muligheder:

Ensartethed og korrekthed: iXBRL indeholder strukturerede data og kan læses af både mennesker og systemer.
Af den grund bliver PDF’en forældet, og vi undgår, at der kan være forskelle mellem XBRL og PDF.
Gennemsigtighed: Tallene kan lettere sammenlignes på tværs af virksomheder og sektorer.
Interaktiv visning: Rapporten åbnes i browseren, hvor man bl.a. kan klikke rundt i indholdsfortegnelsen.
Vi er på vej med en ny og visuelt flot årsrapport.
Stærkere analyse: Tal kan trækkes direkte ind i regneark og BI-værktøjer – uden ekstra tastearbejde.

Vil du være med til at præge fremtidens årsrapporter?
Vi vil rigtig gerne invitere brugere som dig med ind i maskinrummet, hvor vi designer den nye årsrapport. På den måde kan du få direkte indflydelse på, hvordan layout, funktioner og visuel stil bliver.

Hvis du har lyst til at deltage i en lille brugergruppe og være med til at sætte retningen, så giv os et praj – vi tager meget gerne imod dit input."#,
    r#"Newsletter 2:
Erfagrupper diskuterer årsrapport og ESG med Digital Revisor

Der var både varme i luften og i dialogen, da vi onsdag den 13. august trådte ind i Vommevad Forsamlingshus i Regstrup.

Her havde Dennis Malle, formand for en erfagruppe for FDR-medlemmer, samlet bogholdere, revisorer og registrerede revisorer til en eftermiddag, hvor årsrapporter, dokumentation, ESG og fremtiden var på dagsordenen.

Stemningen var præget af nysgerrighed og lyst til at dele erfaringer, og dermed fik vi en udbytterig eftermiddag, hvor vi talte om digitalisering, arbejdet med årsrapporter og ESG-rapportering – ikke som fjerne buzzwords, men som reelle løsninger, der frigør tid og ressourcer i hverdagen.

I samme ombæring havde vi mulighed for at vise Dennis’ erfagruppe, hvordan Digital Revisors værktøjer kan hjælpe med nye og effektive måder at arbejde på.

Vi tog også hul på fremtiden, hvor både iXBRL og bæredygtighedsrapportering fylder. Det var interessant at høre de forskellige medlemmers perspektiver og erfaringer fra både gamle dage og nutiden.

Alt i alt var det en inspirerende og lærerig dag for os. Det er netop i disse erfaringsfællesskaber, at vi sammen kan finde retningen mod en mere digital og bæredygtig fremtid for branchen.

Er du selv med i en erfa-gruppe eller et netværk, hvor I er nysgerrige på digitalisering, iXBRL eller ESG? Så lad os tage snakken – lad os kommer gerne ud og deler erfaringer, perspektiver og konkrete løsninger."#,
    r#"Newsletter 3:
Velkommen til Digital Revisor

Hej {{CNAME}}

Vi er glade for at kunne byde dig velkommen til Digital Revisor og hjælpe dig sikkert i gang med dit nye værktøj til effektiv årsrapportering.

Når du er klar til at gå i gang med første årsregnskab- eller rapport, kan du nemt få hjælp undervejs, hvis der opstår spørgsmål:

🔸I værktøjet finder du Tooltips (❔), guides samt videoer, der kan hjælpe dig hurtigt videre i processen.

🔸I højre hjørne finder du vores support-chat, hvor du får svar fra en af vores kompetente medarbejdere inden få minutter - som regel inden for 30 sekunder!

📞 Du er også velkommen til at give os et kald, hvis du oplever problemer eller har yderligere spørgsmål. Se supportens åbningstider.

Book gennemgang her
Book gratis demo 👆

Det er vigtigt for os, at du får mest muligt ud af Digital Revisor. Få den bedst mulige start med en demo, hvor vi gennemgår værktøjet med dig og viser dig de vigtigste funktioner."#,
];

// Long-form blog/article style; complete examples, never truncated when composed.
static BLOG_EXEMPLARS: [&str; 2] = [
    r#"Blog 1: Sådan fordeler I skatten som ægtefæller ved udlejning af bolig
Ejer du og din ægtefælle en udlejningsbolig sammen? Så har I flere muligheder for at fordele skatten, så den passer til jeres økonomiske situation. Du kan her blive klogere på reglerne, og hvad der gælder for jer.

Mange ægtepar ejer en bolig i fællesskab, som de udlejer. Det kan fx være et forældrekøb, der er lavet for at kunne hjælpe børnene ind på boligmarkedet eller som en god investering til fremtiden.

Et af de spørgsmål, der ofte går igen blandt Digital Revisors brugere er: Hvordan fordeler vi vores indtægter og udgifter fra boligudlejningen, når vi ejer boligen i fællesskab?

Vi har derfor samlet de vigtigste punkter fra skattelovgivningen, så I kan føle jer trygge i jeres valg af indberetning af resultatet til Skat.

Hvem bliver beskattet af udlejningsresultatet?
Lad os starte med at være ærlige: I kan ikke frit vælge, hvem der skal beskattes af udlejningsresultatet. Det kunne man godt få lyst til, hvis fx den ene af jer betaler topskat og den anden ikke gør.

For ægtefæller, der ejer erhvervsvirksomhed sammen, herunder også udlejningsvirksomhed, medregnes denne indtægt hos den ægtefæller, der driver virksomheden.

Det betyder helt lavpraktisk, at ægtefællen, der i overvejende grad står for at have kontakt med lejer, opkræver leje, arrangerer vedligeholdelse af lejemålet mv., skal beskattes af resultatet.

Ifølge Skattelovgivningen (Skat.dk) er det er også denne ægtefælle, der kan fradrage driftsomkostninger og renteudgifter – også selvom I ejer boligen i fællesskab.

Synes du også reglerne omkring fordeling af skat ved udlejning er kringlede? Hos Digital Revisor, har vi et online værktøj, der automatisk beregner din skat og samtidig sørger for, at du overholder alle krav og regler.

Opret gratis bruger

Kan vi fordele resultatet imellem os?
Når I som ægtefæller og driver en udlejningsvirksomhed, har I også mulighed for at fordele det skattemæssige resultat mellem jer – som udgangspunkt.

Det kræver nemlig, at I:
Begge deltager væsentligt og ligeligt i driften af den enes eller begges udlejningsvirksomhed.
Begge hæfter for virksomhedens/ejendommens forpligtelser i samme omfang.
Begge kan begrundes sagligt i fordelingen, fx ud fra arbejdsindsatsen.
Ikke har indgået en lønaftale med den ene ægtefælle i hele eller dele af året.
Reglen om fri fordeling af resultatet er især nyttig, hvis I ønsker at reducere jeres samlede skat eller sikre en fair fordeling i jeres økonomi.

I kan som udgangspunkt ikke frit vælge, hvem der skal beskattes af resultatet – det afhænger af, hvem der driver virksomheden.

Tre skatteovervejelser, der kan spare jer penge
Opfylder I ikke kravene til at kunne fordele resultatet ligeligt imellem jer, eller ønsker i blot, at hele resultatet skal indberettes på den ene af jer, kan I gøre jer følgende overvejelser:

Har én af jer en lavere indkomst?
Hvis den ene af jer har en indkomst under 423.474 kr. (inkl. am-bidrag), kan det give en skattemæssig fordel at indberette overskuddet hos denne person, da vedkommende kan få fuldt beskæftigelsesfradrag.

Har én af jer uudnyttede fradrag?
Hvis én af jer ikke udnytter sit personfradrag fuldt ud, kan det betyde, at en del af overskuddet ikke beskattes.

Betaler én af jer topskat?
Hvis den ene af jer nærmer sig topskattegrænsen, kan det være en fordel at indberette overskuddet hos den med lavere indkomst. Det kan spare jer 15 % i ekstra topskat (sats 2024).

Du ser måske mønstret i overvejelserne. For det er selvfølgelig mest fordelagtigt at indberette skatten for udlejningsboligen på den af jer med den laveste skattesats.

Husk dog, at I som udgangspunkt ikke frit kan vælge, hvem der skal beskattes af resultatet – det afhænger af, hvem der driver virksomheden.

Hvad sker der ved ændringer og skilsmisse?
Ændringer: Hvis I vil justere fordelingen ændre årsopgørelsen, skal I anmode Skatterådet om kan I selv gøre dette det senest den 30. juni i det andet kalenderår efter indkomstårets udløb. Skal I længere tilbage, så skal i anmode Skattestyrelsen om det.

Skilsmisse: Hvis I går fra hinanden, ophører retten til fri fordeling af resultatet. Det betyder, at indkomsten skal fordeles i henhold til ejerskabet af ejendommen, medmindre én af jer køber den anden ud.

Hvordan gør vi det – praktisk talt?
Når I opretter boligen på skat.dk vælger I, hvordan fordelingen af det skattemæssige resultat skal være. Sker der ændringer i jeres økonomi, og ønsker I at ændre fordelingen, skal I være opmærksomme på, at det kun kan gøres én gang.

Med Digital Revisor er det nemt at fordele og indberette resultatet af jeres udlejning til skat. Vores online værktøj tager dig igennem lovgivningen på 5 trin og gør dig klar til at skatteoptimere og indberette din forskudsopgørelse og årsopgørelse til Skat.

På sidste trin i værktøjet har I mulighed for at vælge, hvordan I ønsker at indberette. Vælg om det skal være på den ene af jer, eller om det skal fordeles ligeligt imellem jer. I vil derefter få en specifik guide til indberetningen.

Undervejs har I hele tiden mulighed for at kontakte en os i chatten, hvis der opstår spørgsmål."#,
    r#"Blog 2: Skat af lejeindtægt – privat eller erhvervsmæssig udlejning?
I dette blogindlæg kan du blive klogere på skat ved udlejning af din bolig. Vi kommer også ind på reglerne for de forskellige typer af udlejning, skatteordninger samt fradragsberettigede udgifter.

Når du udlejer en bolig eller et værelse i en bolig, modtager du en lejeindtægt hver måned fra din lejer, så længe udlejningen står på. Lejeindtægten er en del af din skattepligtige indtægt, og du skal derfor betale skat af den samlede lejeindtægt.

Selvom du skal betale skat af lejeindtægten, kan der være mange penge at hente hjem, hvis du kender til skattereglerne for boligudlejning, fx at du kan fratrække udgifter til bl.a. vedligeholdelse og istandsættelse. Desværre kan skattereglerne være ret komplekse og svære at forstå.

Privat eller erhvervsmæssig udlejning af bolig?
For at kunne lave den rette skatteberegning, skal du først finde ud af, hvilken type udlejning du driver.

Vi kan groft skelne mellem to typer af udlejninger, nemlig privat eller erhvervsmæssig udlejning. Du kan også have stødt på begreberne hhv. korttidsudlejning og langtidsudlejning.

Om du udlejer boligen på den ene eller anden måde, er der forskellige veje til, hvordan du kan svare skat af lejeindtægten.

Erhvervsmæssig udlejning
Denne udlejningstype (også kaldet langtidsudlejning) henviser til udlejning af et hus eller en lejlighed, du ikke selv bor i, og som varer i 12 måneder eller mere ad gangen.

Det kan fx være nyerhvervede ejendomme, du har købt med henblik på boligudlejning eller et hus, du har haft til salg i en længere periode, men nu er flyttet ud af og udlejer i stedet.

Har du erhvervsmæssig udlejning kan du nemt og hurtigt få styr på både forskudsopgørelse og oplysningsskema med Digital Revisors værktøj.

Privat udlejning
Privat udlejning (eller korttidsudlejning) henviser til udlejning af en bolig, du som udgangspunkt ikke selv bor i.

For privat udlejning af bolig gælder, at du enten udlejer et værelse i din bolig mellem 1 og 12 måneder på et år eller udlejer hele boligen i en periode på mindre end 12 måneder på et år.

Udlejer du fx din bolig ifm. med et 4 måneders udlandsophold eller i weekender og ferier via platforme som Airbnb, er det privat udlejning. Ved korttidsudlejning kan du indberette skat af lejeindtægten på to måder, nemlig via bundfradrag og via regnskabsmæssigt fradrag.

Digital Revisors værktøj er ikke egnet til denne type skatteopgørelse, men du kan læse mere om reglerne for korttidsudlejning længere nede i indlægget.

Hvordan beregner og indberetter du skat af lejeindtægt?
Som boligudlejer vil du sikkert gerne vide, hvor meget du skal betale i skat af din lejeindtægt. Det afhænger selvfølgelig af, hvor meget du tjener på din boligudlejning, men også hvilken skatteordning, du vælger at benytte.

Når du har langtidsudlejning eller erhvervsmæssig udlejning, går Skat fra at betragte dig som privatperson til at være en mindre virksomhed - dog uden at du skal have et CVR-nummer.

I praksis betyder denne overgang, at du får et udvidet oplysningsskema på skat.dk, hvor du skal udfylde informationer om din lejeindtægt og eventuelle udgifter til vedligeholdelse, el, vand og varme og andre udgifter. Her skal du også vælge den skatteordning, der passer bedst til din økonomiske situation.

Hvilken skatteordning skal du vælge?
Ved erhvervsmæssig udlejning kan du vælge at beregne din skat via reglerne i personskatteloven, kapitalafkastordningen eller virksomhedsordningen:

Personskatteloven
I personskatteloven skal du svare skat af dit overskud, som var det helt almindelig løn fra dit arbejde. Det er dermed den mest enkle metode til at beregne skat af lejeindtægt.

Kapitalafkastordningen
Kapitalafkastordningen giver adgang til et kapitalafkast og er derfor mere skattemæssigt fordelagtig end personskatteloven. Det skyldes, at du betaler mindre i skat for en del af overskuddet, fordi kapitalindkomst beskattes lavere end personlig indkomst. I øjeblikket er kapitalafkastet ikke meget værd, fordi afkastet følger markedsrenten. Markedsrenten er 3 %, men det kan altid ændre sig.

Virksomhedsordningen
Virksomhedsordningen er den skatteordning, der giver adgang til flest skattemæssige fordele. I denne ordning får du fx fuldt fradrag for dine renteudgifter og også mulighed for at opspare overskuddet til en lav skat på 22 %.

Vil du blive klogere på skatteordninger, kan du tage et kig på vores blogindlæg om skatteordninger. Du er også altid velkommen til at kontakte os i chatten.

Hvad kan du trække fra i skat ved udlejning af bolig?
Der findes en lang række fradrag, du kan udnytte som boligudlejer. For at få fradragene skal du fortælle skat, hvilke fradragsberettigede udgifter, du har haft i forbindelse med drift og vedligeholdelse af udlejningsboligen.

Det gør du i Skats forskellige rubrikker på forskudsopgørelsen og oplysningsskemaet. Vores værktøj sørger for, at du får en enkel oversigt, der viser, hvilke tal du skal skrive i dine rubrikker på skat.dk - og sikrer dig, at du får betalt den rigtige skat af lejeindtægten.

Vi har samlet en liste over fradragsberettigede udgifter ved erhvervsmæssig udlejning: (liste udeladt for korthed i dette eksempel).

Er du ny boligudlejer, der gerne vil blive klogere på Skat før, under og efter udlejning? Så kan du læse mere i vores guide til boligudlejning.

Hurtig og sikker hjælp til fradrag og skatteberegning
Hos Digital Revisor kan vi hjælpe dig med at betale korrekt skat af din lejeindtægt. Vores værktøj sætter dig i stand til at blive din egen revisor med blot 5 enkle trin, hvor du nemt kan beregne din skat og hente alle de fradrag, du har ret til.

Du får så en komplet oversigt, der viser dig, hvilke præcise tal, du skal udfylde i rubrikkerne på Skat. Tag et kig på de 5 trin til korrekt skatteberegning her.

Prøv vores værktøj i en gratis prøveversion ved at klikke på knappen forneden og lav en bruger."#,
];

/// Returns the curated style exemplars for a channel.
pub fn exemplars_for(channel: Channel) -> &'static [&'static str] {
    match channel {
        Channel::Linkedin => &LINKEDIN_EXEMPLARS,
        Channel::Facebook => &FACEBOOK_EXEMPLARS,
        Channel::Newsletter => &NEWSLETTER_EXEMPLARS,
        Channel::Blog => &BLOG_EXEMPLARS,
    }
}
