//! Overview page — arrhythmia education content and dataset summary.

use axum::extract::State;
use axum::response::Html;

use cardiohub_genes::render::escape_html;

use crate::handlers::page;
use crate::state::SharedState;

pub async fn overview(State(state): State<SharedState>) -> Html<String> {
    // The overview stays readable without the dataset; the count card just
    // reports the failure.
    let count_html = match state.genes.load() {
        Ok(table) => format!(
            r#"<div class="stat-card">
    <div class="stat-value">{}</div>
    <div class="stat-label">Curated Genes</div>
    <a href="/genes" class="btn">Search the Database</a>
</div>"#,
            table.len()
        ),
        Err(err) => format!(
            r#"<div class="stat-card">
    <div class="stat-value">&mdash;</div>
    <div class="stat-label">Gene database unavailable</div>
    <div class="alert alert-error">Error: {}</div>
</div>"#,
            escape_html(&err.to_string())
        ),
    };

    let body = format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">&#10084; Arrhythmia</h1>
</div>

<p>Arrhythmias are irregularities in heartbeat that can be too fast (tachycardia),
too slow (bradycardia), or erratic. These irregular heart rhythms occur due to
disruptions in the electrical signals controlling the heartbeat. Arrhythmias can
be harmless or life-threatening, depending on the type and severity.</p>

{count}

<div class="card">
    <h2>Types of Arrhythmia</h2>
    <img src="/static/img/arrhythmia-types.svg" alt="Arrhythmia classification" class="figure">
    <ul>
        <li><strong>Atrial Fibrillation (AFib):</strong> a rapid, irregular heartbeat originating in the atria. It increases the risk of stroke.</li>
        <li><strong>Atrial Flutter:</strong> similar to AFib but with a more organized rhythm.</li>
        <li><strong>Supraventricular Tachycardia (SVT):</strong> a rapid heartbeat originating above the ventricles.</li>
        <li><strong>Ventricular Tachycardia:</strong> a fast, regular heart rate arising from the ventricles, which can be life-threatening.</li>
        <li><strong>Ventricular Fibrillation:</strong> a chaotic heart rhythm that requires immediate medical intervention.</li>
        <li><strong>Bradycardia:</strong> a slow heart rate, often caused by issues in the sinoatrial node or conduction system.</li>
        <li><strong>Heart Block:</strong> a delay or blockage in the electrical signals that regulate the heart.</li>
    </ul>
</div>

<div class="card">
    <h2>Precautions and Lifestyle Changes</h2>
    <ul>
        <li>Maintain a heart-healthy diet rich in fruits, vegetables, and whole grains.</li>
        <li>Avoid excessive caffeine, alcohol, and smoking.</li>
        <li>Manage stress through meditation, yoga, or deep breathing exercises.</li>
        <li>Engage in regular physical activity but avoid overexertion.</li>
        <li>Monitor and control conditions such as high blood pressure, diabetes, and sleep apnea.</li>
        <li>Follow prescribed medications and medical advice.</li>
    </ul>
</div>

<div class="card">
    <h2>Treatments</h2>
    <ul>
        <li><strong>Medications:</strong> beta-blockers, calcium channel blockers, anticoagulants, and antiarrhythmic drugs.</li>
        <li><strong>Lifestyle changes:</strong> adopting a healthy diet, exercising, and avoiding arrhythmia triggers.</li>
        <li><strong>Pacemakers:</strong> devices implanted to regulate slow heart rhythms.</li>
        <li><strong>Implantable Cardioverter Defibrillator (ICD):</strong> a device used to prevent sudden cardiac arrest in high-risk patients.</li>
        <li><strong>Cardioversion:</strong> electrical shock therapy used to restore normal heart rhythm.</li>
        <li><strong>Catheter ablation:</strong> a minimally invasive procedure that destroys the heart tissue causing abnormal electrical signals.</li>
        <li><strong>Surgery:</strong> in severe cases, procedures like maze surgery may be performed to correct arrhythmia.</li>
    </ul>
</div>

<div class="card">
    <h2>Conclusion</h2>
    <p>Arrhythmias range from harmless to life-threatening conditions. Early detection,
    lifestyle modifications, and appropriate medical interventions can significantly
    improve quality of life and prevent complications. Regular check-ups and adherence
    to medical advice are essential for managing arrhythmia.</p>
</div>"#,
        count = count_html
    );
    Html(page("Overview", &body))
}
